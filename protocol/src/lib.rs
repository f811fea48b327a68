//! Gira Protocol
//!
//! Wire contract between the Gira gateway and the two backend services it fronts (the data
//! service and the authentication service). The gateway holds no data itself: every HTTP
//! operation becomes exactly one command frame on a multiplexed TCP connection, and the
//! backend answers with exactly one reply frame carrying the same correlation id.
//!
//! # Overview
//!
//! - **Command vocabulary** (`command`) - Flat command names the backends dispatch on
//! - **Envelopes** (`envelope`) - Request/response frames and the tagged `Reply`
//! - **Codec** (`codec`) - Length-prefixed JSON framing and frame (de)serialization
//! - **Records** (`record`) - Backend data model and per-command payload schemas
//!
//! This crate is shared by the gateway and by the scripted mock backend in `test-utils`,
//! so both sides of every test speak exactly the same protocol.

pub mod codec;
pub mod command;
pub mod envelope;
pub mod record;

pub use command::{Command, Service};
pub use envelope::{Reply, RequestFrame, ResponseFrame};
