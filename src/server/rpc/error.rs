use protocol::{Command, Service};
use std::time::Duration;
use thiserror::Error;

/// Transport-level failure of one command exchange.
///
/// Every variant is terminal for the request it is reported on: the gateway never re-sends
/// a command after any of these.
#[derive(Error, Debug, Clone)]
pub enum RpcError {
    /// The backend endpoint could not be reached.
    #[error("Failed to connect to {service} service at {addr}: {reason}")]
    Connect {
        service: Service,
        addr: String,
        reason: String,
    },

    /// The connection dropped while the request was pending.
    #[error("Connection lost before reply to `{command}`")]
    Disconnected { command: Command },

    /// No reply arrived within the request timeout.
    #[error("Timed out after {elapsed:?} waiting for reply to `{command}`")]
    Timeout { command: Command, elapsed: Duration },

    /// A reply arrived but could not be read as the expected type.
    #[error("Malformed reply to `{command}`: {reason}")]
    Malformed { command: Command, reason: String },

    /// The backend reported that it failed to execute the command.
    #[error("Backend failed to execute `{command}`: {message}")]
    Remote { command: Command, message: String },

    /// The backend answered with a reply kind the command does not allow.
    #[error("Unexpected `{reply}` reply to `{command}`")]
    UnexpectedReply {
        command: Command,
        reply: &'static str,
    },

    /// The payload could not be serialized.
    #[error("Failed to encode payload for `{command}`: {reason}")]
    Encode { command: Command, reason: String },

    /// The command was sent through the client of the wrong backend.
    #[error("Command `{command}` belongs to the {expected} service, not the {actual} service")]
    WrongService {
        command: Command,
        expected: Service,
        actual: Service,
    },
}

impl RpcError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, RpcError::Timeout { .. })
    }
}
