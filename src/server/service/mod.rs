//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Outcome mapping**: Turning the backend's not-found signal into resource-specific
//!   `NotFound` errors for single-resource operations
//! - **Credentials**: Hashing and verifying passwords locally so plaintext never leaves
//!   the gateway
//! - **Domain Models**: Working with domain models rather than DTOs or records

pub mod auth;
pub mod comment;
pub mod credential;
pub mod issue;
pub mod project;
pub mod user;
