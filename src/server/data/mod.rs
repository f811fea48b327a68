//! Repository layer over the backend services.
//!
//! This module contains one repository per resource. Each method sends exactly one command
//! through a `ServiceClient` and converts the records that come back into domain models.
//! Single-resource operations return `Option`, where `None` is the backend's not-found
//! signal; collection operations return a `Vec`, which may be empty.

pub mod comment;
pub mod credential;
pub mod issue;
pub mod project;
pub mod user;
