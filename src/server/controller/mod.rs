//! HTTP request handlers.
//!
//! Each handler validates its input, converts DTOs to params, calls exactly one service
//! operation and converts the resulting domain model back to a DTO. Handlers never retry a
//! failed backend call.

pub mod auth;
pub mod comment;
pub mod issue;
pub mod project;
pub mod user;
