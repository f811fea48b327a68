use futures::future::{BoxFuture, FutureExt, Shared};
use protocol::{Command, Reply, Service};
use serde_json::Value;
use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, MutexGuard, Weak,
    },
    time::Duration,
};

use super::{connection::Connection, error::RpcError};

/// Connection and timeout settings for one backend endpoint.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on the wait for a single reply, reconnecting included.
    pub request_timeout: Duration,
    /// Upper bound on a single TCP connect attempt.
    pub connect_timeout: Duration,
    /// Connect attempts made before a connect is reported as failed.
    pub connect_attempts: u32,
    /// Pause between failed connect attempts.
    pub connect_backoff: Duration,
}

impl ChannelConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            connect_attempts: 3,
            connect_backoff: Duration::from_millis(250),
        }
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn connect_attempts(mut self, attempts: u32) -> Self {
        self.connect_attempts = attempts.max(1);
        self
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Reconnect attempt shared by every caller that finds the connection closed.
type Reconnect = Shared<BoxFuture<'static, Result<Arc<Connection>, RpcError>>>;

struct Slot {
    current: Option<Arc<Connection>>,
    reconnecting: Option<Reconnect>,
}

/// Long-lived, reconnectable channel to one backend service.
///
/// Any number of callers may `send` concurrently; requests share a single multiplexed
/// connection and each reply is matched to its request by correlation id, so replies may
/// arrive in any order. If the connection drops, the requests pending on it fail and the
/// next `send` starts one background reconnect that every concurrent caller waits on.
/// Commands are never re-sent.
pub struct RpcChannel {
    service: Service,
    config: ChannelConfig,
    /// Correlation ids are unique for the lifetime of the channel, across reconnects.
    next_id: AtomicU64,
    slot: Arc<Mutex<Slot>>,
}

impl RpcChannel {
    /// Connects to the backend, failing with `RpcError::Connect` if it is unreachable.
    pub async fn connect(service: Service, config: ChannelConfig) -> Result<Self, RpcError> {
        let connection = establish(service, config.clone()).await?;

        Ok(Self {
            service,
            config,
            next_id: AtomicU64::new(1),
            slot: Arc::new(Mutex::new(Slot {
                current: Some(connection),
                reconnecting: None,
            })),
        })
    }

    pub fn service(&self) -> Service {
        self.service
    }

    /// Sends one command and waits for its single reply.
    ///
    /// The wait, reconnecting included, never exceeds `request_timeout`.
    pub async fn send(&self, command: Command, payload: Value) -> Result<Reply<Value>, RpcError> {
        let timeout = self.config.request_timeout;
        let exchange = async {
            let connection = self.connection().await?;
            let id = self.next_id.fetch_add(1, Ordering::Relaxed);

            connection.request(id, command, payload).await
        };

        match tokio::time::timeout(timeout, exchange).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    "`{}` to {} service at {} timed out after {:?}",
                    command,
                    self.service,
                    self.config.addr(),
                    timeout
                );
                Err(RpcError::Timeout {
                    command,
                    elapsed: timeout,
                })
            }
        }
    }

    /// Number of requests currently awaiting a reply.
    pub fn pending_count(&self) -> usize {
        lock(&self.slot)
            .current
            .as_ref()
            .map(|connection| connection.pending_count())
            .unwrap_or(0)
    }

    /// Returns the live connection, joining or starting a reconnect if it was closed.
    ///
    /// The reconnect runs as its own task, so it completes and installs its connection
    /// even when every caller waiting on it has timed out.
    async fn connection(&self) -> Result<Arc<Connection>, RpcError> {
        let reconnect = {
            let mut slot = lock(&self.slot);

            if let Some(connection) = slot.current.as_ref().filter(|c| c.is_open()) {
                return Ok(connection.clone());
            }

            match &slot.reconnecting {
                Some(reconnect) => reconnect.clone(),
                None => {
                    tracing::info!(
                        "Reconnecting to {} service at {}",
                        self.service,
                        self.config.addr()
                    );
                    let reconnect = spawn_reconnect(
                        self.service,
                        self.config.clone(),
                        Arc::downgrade(&self.slot),
                    );
                    slot.reconnecting = Some(reconnect.clone());
                    reconnect
                }
            }
        };

        reconnect.await
    }
}

impl Drop for RpcChannel {
    fn drop(&mut self) {
        if let Some(connection) = lock(&self.slot).current.take() {
            connection.close("channel dropped");
        }
    }
}

fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Starts one reconnect task and installs its connection in `slot` when it succeeds.
fn spawn_reconnect(service: Service, config: ChannelConfig, slot: Weak<Mutex<Slot>>) -> Reconnect {
    let addr = config.addr();
    let task = tokio::spawn(async move {
        let result = establish(service, config).await;

        match slot.upgrade() {
            Some(shared) => {
                let mut slot = lock(&shared);
                slot.reconnecting = None;
                if let Ok(connection) = &result {
                    slot.current = Some(connection.clone());
                }
            }
            None => {
                if let Ok(connection) = &result {
                    connection.close("channel dropped");
                }
            }
        }

        result
    });

    async move {
        task.await.unwrap_or_else(|e| {
            Err(RpcError::Connect {
                service,
                addr,
                reason: e.to_string(),
            })
        })
    }
    .boxed()
    .shared()
}

async fn establish(service: Service, config: ChannelConfig) -> Result<Arc<Connection>, RpcError> {
    let addr = config.addr();
    let attempts = config.connect_attempts.max(1);
    let mut last_error = String::new();

    for attempt in 1..=attempts {
        match Connection::open(&addr, config.connect_timeout).await {
            Ok(connection) => {
                tracing::info!("Connected to {} service at {}", service, addr);
                return Ok(connection);
            }
            Err(e) => {
                tracing::warn!(
                    "Connect attempt {}/{} to {} service at {} failed: {}",
                    attempt,
                    attempts,
                    service,
                    addr,
                    e
                );
                last_error = e.to_string();
            }
        }

        if attempt < attempts {
            tokio::time::sleep(config.connect_backoff).await;
        }
    }

    Err(RpcError::Connect {
        service,
        addr,
        reason: last_error,
    })
}
