//! API data transfer objects.
//!
//! Request and response bodies of the HTTP surface. Field names are camelCase on the wire
//! and every type carries an OpenAPI schema.

pub mod api;
pub mod auth;
pub mod comment;
pub mod issue;
pub mod project;
pub mod user;
