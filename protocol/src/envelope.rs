//! Request and response envelopes.
//!
//! A request frame carries a correlation id, the command name and an opaque JSON payload.
//! The matching response frame echoes the id and carries a tagged [`Reply`]:
//!
//! ```json
//! { "id": 7, "command": "findUser", "payload": "ada@example.com" }
//! { "id": 7, "reply": { "status": "found", "value": { "id": 1, "email": "ada@example.com" } } }
//! { "id": 7, "reply": { "status": "notFound" } }
//! { "id": 7, "reply": { "status": "error", "value": "database unavailable" } }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::command::Command;

/// Correlation token tying a reply to the request that provoked it.
pub type CorrelationId = u64;

/// Command sent from the gateway to a backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestFrame {
    pub id: CorrelationId,
    pub command: Command,
    pub payload: Value,
}

/// Single reply sent from a backend to the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseFrame {
    pub id: CorrelationId,
    pub reply: Reply<Value>,
}

/// Outcome of one command as reported by the backend.
///
/// Absence is its own variant so that a legitimate value of `0` or `false` is never
/// confused with a missing resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "camelCase")]
pub enum Reply<T> {
    /// The command succeeded and produced a value.
    Found(T),
    /// The addressed resource does not exist.
    NotFound,
    /// The backend failed to execute the command.
    Error(String),
}

impl<T> Reply<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reply<U> {
        match self {
            Reply::Found(value) => Reply::Found(f(value)),
            Reply::NotFound => Reply::NotFound,
            Reply::Error(message) => Reply::Error(message),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Reply::Found(_))
    }
}

impl Reply<Value> {
    /// Re-reads a `Found(0)` reply as `NotFound`.
    ///
    /// Backends built against the older convention answer a missing resource with the bare
    /// integer `0` instead of the `notFound` tag.
    pub fn with_legacy_sentinel(self) -> Self {
        match self {
            Reply::Found(value) if is_zero_sentinel(&value) => Reply::NotFound,
            other => other,
        }
    }
}

/// Whether a JSON value is the legacy not-found sentinel (the number zero).
pub fn is_zero_sentinel(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}
