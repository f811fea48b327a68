//! Scripted mock backend.
//!
//! A `MockBackend` is a real TCP server on an ephemeral localhost port that speaks the
//! gateway's framing. Every request is recorded, then answered according to the `Script`:
//! one-shot steps queued with `once()` are consumed first, then the standing step set with
//! `on()` applies. Each request is answered from its own task, so delayed steps let replies
//! overtake each other exactly as they can with a real backend.

use bytes::Bytes;
use futures::{SinkExt, StreamExt};
use protocol::{codec, envelope::ResponseFrame, Command, Reply, RequestFrame};
use serde::Serialize;
use serde_json::Value;
use std::{
    collections::{HashMap, VecDeque},
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};
use tokio::{
    net::{TcpListener, TcpStream},
    sync::{mpsc, Notify},
};
use tokio_util::{codec::Framed, sync::CancellationToken};

use crate::error::TestError;

/// How the backend answers one request.
#[derive(Debug, Clone)]
pub enum Step {
    /// Send this reply.
    Reply(Reply<Value>),
    /// Reply `found` with the request's own payload.
    Echo,
    /// Wait, then perform the inner step.
    Delay(Duration, Box<Step>),
    /// Never answer.
    Silence,
    /// Send these bytes as a frame body, whatever they contain.
    Raw(Vec<u8>),
    /// Send a frame carrying the request's id but a reply that cannot be read.
    Garbled,
    /// Close the connection the request arrived on.
    Disconnect,
}

impl Step {
    /// Replies `found` with the serialized value.
    ///
    /// Panics if the value cannot be serialized, which only happens for broken test data.
    pub fn found(value: impl Serialize) -> Self {
        Step::Reply(Reply::Found(
            serde_json::to_value(value).expect("test value must serialize"),
        ))
    }

    pub fn not_found() -> Self {
        Step::Reply(Reply::NotFound)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Step::Reply(Reply::Error(message.into()))
    }

    pub fn delayed(delay: Duration, step: Step) -> Self {
        Step::Delay(delay, Box::new(step))
    }
}

/// Per-command reply plan for a mock backend.
#[derive(Debug, Clone, Default)]
pub struct Script {
    queued: HashMap<Command, VecDeque<Step>>,
    standing: HashMap<Command, Step>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every request for `command` with `step` once queued steps run out.
    pub fn on(mut self, command: Command, step: Step) -> Self {
        self.standing.insert(command, step);
        self
    }

    /// Answers the next request for `command` with `step`.
    pub fn once(mut self, command: Command, step: Step) -> Self {
        self.queued.entry(command).or_default().push_back(step);
        self
    }

    fn next(&mut self, command: Command) -> Step {
        if let Some(step) = self.queued.get_mut(&command).and_then(VecDeque::pop_front) {
            return step;
        }

        self.standing
            .get(&command)
            .cloned()
            .unwrap_or_else(|| Step::error(format!("unscripted command `{}`", command)))
    }
}

enum Outgoing {
    Frame(Bytes),
    Close,
}

struct Shared {
    script: Mutex<Script>,
    received: Mutex<Vec<RequestFrame>>,
    arrivals: Notify,
    connections: Mutex<Vec<mpsc::UnboundedSender<Outgoing>>>,
    accepted: AtomicUsize,
    shutdown: CancellationToken,
}

/// Running mock backend. Stops accepting and closes its connections when dropped.
pub struct MockBackend {
    addr: SocketAddr,
    shared: Arc<Shared>,
}

impl MockBackend {
    /// Binds an ephemeral localhost port and starts serving `script`.
    pub async fn spawn(script: Script) -> Result<Self, TestError> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let shared = Arc::new(Shared {
            script: Mutex::new(script),
            received: Mutex::new(Vec::new()),
            arrivals: Notify::new(),
            connections: Mutex::new(Vec::new()),
            accepted: AtomicUsize::new(0),
            shutdown: CancellationToken::new(),
        });

        tokio::spawn(accept_loop(listener, shared.clone()));

        Ok(Self { addr, shared })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Every request received so far, in arrival order.
    pub fn received(&self) -> Vec<RequestFrame> {
        lock(&self.shared.received).clone()
    }

    pub fn received_commands(&self) -> Vec<Command> {
        lock(&self.shared.received)
            .iter()
            .map(|frame| frame.command)
            .collect()
    }

    /// Number of connections accepted so far.
    pub fn accepted_connections(&self) -> usize {
        self.shared.accepted.load(Ordering::SeqCst)
    }

    /// Replaces the standing step for `command`.
    pub fn respond(&self, command: Command, step: Step) {
        lock(&self.shared.script).standing.insert(command, step);
    }

    /// Waits until at least `count` requests have arrived.
    pub async fn wait_for_requests(&self, count: usize, timeout: Duration) -> Result<(), TestError> {
        let wait = async {
            loop {
                let arrived = self.shared.arrivals.notified();
                if lock(&self.shared.received).len() >= count {
                    return;
                }
                arrived.await;
            }
        };

        tokio::time::timeout(timeout, wait)
            .await
            .map_err(|_| TestError::WaitTimedOut {
                expected: count,
                received: lock(&self.shared.received).len(),
            })
    }

    /// Closes every open connection without answering pending requests.
    pub fn disconnect_all(&self) {
        for connection in lock(&self.shared.connections).drain(..) {
            let _ = connection.send(Outgoing::Close);
        }
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.shared.shutdown.cancel();
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

async fn accept_loop(listener: TcpListener, shared: Arc<Shared>) {
    loop {
        tokio::select! {
            _ = shared.shutdown.cancelled() => return,
            accepted = listener.accept() => match accepted {
                Ok((stream, _)) => {
                    shared.accepted.fetch_add(1, Ordering::SeqCst);
                    tokio::spawn(serve_connection(stream, shared.clone()));
                }
                Err(_) => return,
            },
        }
    }
}

async fn serve_connection(stream: TcpStream, shared: Arc<Shared>) {
    let (mut sink, mut frames) = Framed::new(stream, codec::frame_codec()).split();
    let (outgoing, mut queue) = mpsc::unbounded_channel();
    lock(&shared.connections).push(outgoing.clone());

    loop {
        tokio::select! {
            _ = shared.shutdown.cancelled() => break,
            frame = frames.next() => match frame {
                Some(Ok(body)) => {
                    let Ok(request) = codec::decode_request(&body) else {
                        continue;
                    };
                    let step = lock(&shared.script).next(request.command);
                    lock(&shared.received).push(request.clone());
                    shared.arrivals.notify_waiters();
                    tokio::spawn(answer(step, request, outgoing.clone()));
                }
                _ => break,
            },
            out = queue.recv() => match out {
                Some(Outgoing::Frame(body)) => {
                    if sink.send(body).await.is_err() {
                        break;
                    }
                }
                Some(Outgoing::Close) | None => break,
            },
        }
    }
}

async fn answer(mut step: Step, request: RequestFrame, outgoing: mpsc::UnboundedSender<Outgoing>) {
    loop {
        let reply = match step {
            Step::Delay(delay, next) => {
                tokio::time::sleep(delay).await;
                step = *next;
                continue;
            }
            Step::Reply(reply) => reply,
            Step::Echo => Reply::Found(request.payload.clone()),
            Step::Silence => return,
            Step::Raw(body) => {
                let _ = outgoing.send(Outgoing::Frame(Bytes::from(body)));
                return;
            }
            Step::Garbled => {
                let body = serde_json::json!({
                    "id": request.id,
                    "reply": { "status": "garbled" },
                });
                let _ = outgoing.send(Outgoing::Frame(Bytes::from(body.to_string())));
                return;
            }
            Step::Disconnect => {
                let _ = outgoing.send(Outgoing::Close);
                return;
            }
        };

        let frame = ResponseFrame {
            id: request.id,
            reply,
        };
        if let Ok(body) = codec::encode_response(&frame) {
            let _ = outgoing.send(Outgoing::Frame(body));
        }
        return;
    }
}
