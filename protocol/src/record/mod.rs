//! Backend data model and per-command payload schemas.
//!
//! Records are what the data service returns; payload types are what the gateway sends.
//! Field names are camelCase on the wire and timestamps are RFC 3339.

pub mod comment;
pub mod credential;
pub mod enums;
pub mod issue;
pub mod project;
pub mod user;

use serde::{Deserialize, Serialize};

/// Payload of the `edit*` commands addressed by a numeric id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditById<T> {
    pub id: i32,
    pub changes: T,
}

/// Payload of commands that take no arguments; serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoPayload {}
