use protocol::{Command, Reply, Service};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;

use super::{channel::RpcChannel, error::RpcError};

/// How a single-resource reply signals absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SentinelPolicy {
    /// Only the `notFound` tag means absent.
    #[default]
    Tagged,
    /// A found value of `0` also means absent, for backends speaking the older convention.
    LegacyZero,
}

/// Client for one backend service.
///
/// Wraps a shared [`RpcChannel`] and interprets replies according to the kind of operation:
/// single-resource lookups and mutations (`find`) honour the not-found signal, collection
/// queries (`list`) never do, and commands that must produce a value (`expect`) treat
/// absence as a protocol violation. Clones share the channel.
#[derive(Clone)]
pub struct ServiceClient {
    channel: Arc<RpcChannel>,
    sentinel: SentinelPolicy,
}

impl ServiceClient {
    pub fn new(channel: Arc<RpcChannel>, sentinel: SentinelPolicy) -> Self {
        Self { channel, sentinel }
    }

    pub fn service(&self) -> Service {
        self.channel.service()
    }

    /// Number of requests on this client's channel still awaiting a reply.
    pub fn pending_count(&self) -> usize {
        self.channel.pending_count()
    }

    /// Sends a single-resource command; `None` means the resource does not exist.
    pub async fn find<P, T>(&self, command: Command, payload: &P) -> Result<Option<T>, RpcError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let reply = match self.sentinel {
            SentinelPolicy::Tagged => self.call(command, payload).await?,
            SentinelPolicy::LegacyZero => self.call(command, payload).await?.with_legacy_sentinel(),
        };

        match reply {
            Reply::Found(value) => decode(command, value).map(Some),
            Reply::NotFound => Ok(None),
            Reply::Error(message) => Err(RpcError::Remote { command, message }),
        }
    }

    /// Sends a collection command. An empty collection is passed through unchanged.
    pub async fn list<P, T>(&self, command: Command, payload: &P) -> Result<Vec<T>, RpcError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        match self.call(command, payload).await? {
            Reply::Found(value) => decode(command, value),
            Reply::NotFound => Err(RpcError::UnexpectedReply {
                command,
                reply: "notFound",
            }),
            Reply::Error(message) => Err(RpcError::Remote { command, message }),
        }
    }

    /// Sends a command that must produce a value.
    pub async fn expect<P, T>(&self, command: Command, payload: &P) -> Result<T, RpcError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        match self.call(command, payload).await? {
            Reply::Found(value) => decode(command, value),
            Reply::NotFound => Err(RpcError::UnexpectedReply {
                command,
                reply: "notFound",
            }),
            Reply::Error(message) => Err(RpcError::Remote { command, message }),
        }
    }

    async fn call<P>(&self, command: Command, payload: &P) -> Result<Reply<Value>, RpcError>
    where
        P: Serialize + ?Sized,
    {
        if command.service() != self.service() {
            return Err(RpcError::WrongService {
                command,
                expected: command.service(),
                actual: self.service(),
            });
        }

        let payload = serde_json::to_value(payload).map_err(|e| RpcError::Encode {
            command,
            reason: e.to_string(),
        })?;

        let reply = self.channel.send(command, payload).await;

        if let Err(err) = &reply {
            tracing::error!(
                "{} service call failed ({} still pending): {}",
                self.service(),
                self.pending_count(),
                err
            );
        }

        reply
    }
}

fn decode<T: DeserializeOwned>(command: Command, value: Value) -> Result<T, RpcError> {
    serde_json::from_value(value).map_err(|e| RpcError::Malformed {
        command,
        reason: e.to_string(),
    })
}
