//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from backend
//! records at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types are built from validated DTOs and converted into command payloads.

pub mod auth;
pub mod comment;
pub mod issue;
pub mod project;
pub mod user;
