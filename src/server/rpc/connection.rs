//! A single multiplexed connection to a backend.
//!
//! The connection owns two tasks. The writer drains an outbound queue of encoded request
//! frames into the socket; the reader decodes reply frames and completes whichever pending
//! request carries the same correlation id. When either task stops, the connection is
//! closed and every request still pending on it fails with `Disconnected`.

use bytes::Bytes;
use dashmap::DashMap;
use futures::{
    stream::{SplitSink, SplitStream},
    SinkExt, StreamExt,
};
use protocol::{
    codec::{self, CodecError},
    envelope::CorrelationId,
    Command, Reply, RequestFrame,
};
use serde_json::Value;
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::{
    net::TcpStream,
    sync::{mpsc, oneshot},
};
use tokio_util::{
    codec::{Framed, LengthDelimitedCodec},
    sync::CancellationToken,
};

use super::error::RpcError;

/// Capacity of the outbound frame queue shared by all callers.
const OUTBOUND_BUFFER: usize = 1024;

type ReplySender = oneshot::Sender<Result<Reply<Value>, RpcError>>;
type FrameSink = SplitSink<Framed<TcpStream, LengthDelimitedCodec>, Bytes>;
type FrameStream = SplitStream<Framed<TcpStream, LengthDelimitedCodec>>;

/// A request awaiting its reply.
struct Pending {
    command: Command,
    reply: ReplySender,
}

pub(super) struct Connection {
    peer: String,
    outbound: mpsc::Sender<Bytes>,
    pending: DashMap<CorrelationId, Pending>,
    closed: AtomicBool,
    shutdown: CancellationToken,
}

impl Connection {
    /// Opens a TCP connection and starts its reader and writer tasks.
    pub(super) async fn open(peer: &str, connect_timeout: Duration) -> std::io::Result<Arc<Self>> {
        let stream = tokio::time::timeout(connect_timeout, TcpStream::connect(peer))
            .await
            .map_err(|_| {
                std::io::Error::new(std::io::ErrorKind::TimedOut, "connect timed out")
            })??;
        stream.set_nodelay(true)?;

        let (sink, stream) = Framed::new(stream, codec::frame_codec()).split();
        let (outbound, queue) = mpsc::channel(OUTBOUND_BUFFER);

        let connection = Arc::new(Self {
            peer: peer.to_string(),
            outbound,
            pending: DashMap::new(),
            closed: AtomicBool::new(false),
            shutdown: CancellationToken::new(),
        });

        tokio::spawn(write_loop(connection.clone(), sink, queue));
        tokio::spawn(read_loop(connection.clone(), stream));

        Ok(connection)
    }

    pub(super) fn is_open(&self) -> bool {
        !self.closed.load(Ordering::SeqCst)
    }

    /// Number of requests currently awaiting a reply on this connection.
    pub(super) fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Sends one command and waits for its reply.
    ///
    /// The correlation slot is released on every exit path: reply, disconnect, or the
    /// caller dropping this future when its deadline passes.
    pub(super) async fn request(
        &self,
        id: CorrelationId,
        command: Command,
        payload: Value,
    ) -> Result<Reply<Value>, RpcError> {
        let body = codec::encode_request(&RequestFrame {
            id,
            command,
            payload,
        })
        .map_err(|e| RpcError::Encode {
            command,
            reason: e.to_string(),
        })?;

        let (reply, response) = oneshot::channel();
        self.pending.insert(id, Pending { command, reply });
        let _slot = SlotGuard {
            pending: &self.pending,
            id,
        };

        // `close` flips the flag before draining, so a request registered after the drain
        // observes it here.
        if !self.is_open() {
            return Err(RpcError::Disconnected { command });
        }

        self.outbound
            .send(body)
            .await
            .map_err(|_| RpcError::Disconnected { command })?;

        match response.await {
            Ok(result) => result,
            Err(_) => Err(RpcError::Disconnected { command }),
        }
    }

    /// Routes one inbound frame to its pending request.
    fn dispatch(&self, body: &[u8]) {
        match codec::decode_response(body) {
            Ok(frame) => match self.pending.remove(&frame.id) {
                Some((_, pending)) => {
                    let _ = pending.reply.send(Ok(frame.reply));
                }
                None => {
                    tracing::debug!(
                        "Discarding reply {} from {}: no request is waiting for it",
                        frame.id,
                        self.peer
                    );
                }
            },
            Err(CodecError::Malformed { id, reason }) => {
                if let Some((_, pending)) = self.pending.remove(&id) {
                    let _ = pending.reply.send(Err(RpcError::Malformed {
                        command: pending.command,
                        reason,
                    }));
                }
            }
            Err(err) => {
                tracing::warn!("Dropping frame from {}: {}", self.peer, err);
            }
        }
    }

    /// Closes the connection and fails every pending request.
    pub(super) fn close(&self, reason: &str) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            tracing::warn!("Connection to {} closed: {}", self.peer, reason);
            self.shutdown.cancel();
        }

        let ids: Vec<CorrelationId> = self.pending.iter().map(|entry| *entry.key()).collect();
        for id in ids {
            if let Some((_, pending)) = self.pending.remove(&id) {
                let _ = pending.reply.send(Err(RpcError::Disconnected {
                    command: pending.command,
                }));
            }
        }
    }
}

/// Frees a correlation slot when the request future finishes or is dropped.
struct SlotGuard<'a> {
    pending: &'a DashMap<CorrelationId, Pending>,
    id: CorrelationId,
}

impl Drop for SlotGuard<'_> {
    fn drop(&mut self) {
        self.pending.remove(&self.id);
    }
}

async fn write_loop(connection: Arc<Connection>, mut sink: FrameSink, mut queue: mpsc::Receiver<Bytes>) {
    let reason = loop {
        tokio::select! {
            _ = connection.shutdown.cancelled() => break "shut down",
            frame = queue.recv() => match frame {
                Some(frame) => {
                    if let Err(e) = sink.send(frame).await {
                        tracing::error!("Failed to write frame to {}: {}", connection.peer, e);
                        break "write failed";
                    }
                }
                None => break "outbound queue closed",
            },
        }
    };

    connection.close(reason);
}

async fn read_loop(connection: Arc<Connection>, mut stream: FrameStream) {
    let reason = loop {
        tokio::select! {
            _ = connection.shutdown.cancelled() => break "shut down",
            frame = stream.next() => match frame {
                Some(Ok(body)) => connection.dispatch(&body),
                Some(Err(e)) => {
                    tracing::error!("Failed to read frame from {}: {}", connection.peer, e);
                    break "read failed";
                }
                None => break "closed by peer",
            },
        }
    };

    connection.close(reason);
}
