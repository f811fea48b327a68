//! Command-dispatch RPC layer.
//!
//! The gateway owns no data: every operation is forwarded as a single command over a
//! persistent TCP channel to either the data service or the authentication service, and
//! the single reply that comes back is handed to the caller.
//!
//! - **Channel** (`channel`) - Reconnectable, multiplexed connection to one backend
//! - **Connection** (`connection`) - Reader/writer tasks and correlation of replies
//! - **Client** (`client`) - Per-service reply interpretation (`find`, `list`, `expect`)
//! - **Error** (`error`) - Transport failures reported to callers

pub mod channel;
pub mod client;
mod connection;
pub mod error;

pub use channel::{ChannelConfig, RpcChannel};
pub use client::{SentinelPolicy, ServiceClient};
pub use error::RpcError;
