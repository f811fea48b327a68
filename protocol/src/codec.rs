//! Frame codec.
//!
//! Frames are a 4-byte big-endian length prefix followed by a UTF-8 JSON body. The length
//! prefix is handled by `LengthDelimitedCodec`; this module only turns frame bodies into
//! envelopes and back.

use bytes::Bytes;
use serde_json::Value;
use thiserror::Error;
use tokio_util::codec::LengthDelimitedCodec;

use crate::envelope::{CorrelationId, Reply, RequestFrame, ResponseFrame};

/// Largest frame body accepted in either direction.
pub const MAX_FRAME_LENGTH: usize = 8 * 1024 * 1024;

#[derive(Error, Debug)]
pub enum CodecError {
    /// The frame could not be serialized.
    #[error("Failed to encode frame: {0}")]
    Encode(#[source] serde_json::Error),

    /// The frame has no readable correlation id, so it cannot be routed to any request.
    #[error("Uncorrelated frame: {0}")]
    Uncorrelated(String),

    /// The frame names a request but its reply is unreadable.
    #[error("Malformed reply for request {id}: {reason}")]
    Malformed { id: CorrelationId, reason: String },
}

/// Builds the length-delimited codec used on both ends of a connection.
pub fn frame_codec() -> LengthDelimitedCodec {
    LengthDelimitedCodec::builder()
        .length_field_length(4)
        .big_endian()
        .max_frame_length(MAX_FRAME_LENGTH)
        .new_codec()
}

pub fn encode_request(frame: &RequestFrame) -> Result<Bytes, CodecError> {
    serde_json::to_vec(frame)
        .map(Bytes::from)
        .map_err(CodecError::Encode)
}

pub fn encode_response(frame: &ResponseFrame) -> Result<Bytes, CodecError> {
    serde_json::to_vec(frame)
        .map(Bytes::from)
        .map_err(CodecError::Encode)
}

pub fn decode_request(body: &[u8]) -> Result<RequestFrame, CodecError> {
    serde_json::from_slice(body).map_err(|e| CodecError::Uncorrelated(e.to_string()))
}

/// Decodes a reply frame in two steps so that a broken reply can still be attributed to the
/// request it answers.
pub fn decode_response(body: &[u8]) -> Result<ResponseFrame, CodecError> {
    let raw: Value =
        serde_json::from_slice(body).map_err(|e| CodecError::Uncorrelated(e.to_string()))?;

    let id = raw
        .get("id")
        .and_then(Value::as_u64)
        .ok_or_else(|| CodecError::Uncorrelated("missing numeric `id`".to_string()))?;

    let reply = raw
        .get("reply")
        .cloned()
        .ok_or_else(|| CodecError::Malformed {
            id,
            reason: "missing `reply`".to_string(),
        })?;

    let reply: Reply<Value> =
        serde_json::from_value(reply).map_err(|e| CodecError::Malformed {
            id,
            reason: e.to_string(),
        })?;

    Ok(ResponseFrame { id, reply })
}
