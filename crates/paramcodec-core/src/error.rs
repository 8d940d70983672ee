//! Error types for the parameter encode/decode pipeline.
//!
//! All errors abort the whole operation at the point of detection;
//! there is no partial `(types, values)` output, because a downstream
//! ABI call needs a fully resolved argument list.

use thiserror::Error;

/// Errors raised while building, encoding, or decoding call parameters
/// and contract results.
#[derive(Debug, Error)]
pub enum ParamError {
    #[error("Bytes32 must be 32 bytes long, got {got} bytes")]
    Bytes32Length { got: usize },

    #[error("Tuple structure in array must be the same: expected ({expected}), got ({got})")]
    TupleShapeMismatch { expected: String, got: String },

    #[error("Type \"{tag}\" not implemented")]
    UnimplementedType { tag: String },

    #[error("Unsupported type \"{requested}\", available types are: {available}")]
    UnsupportedReturnType { requested: String, available: String },

    #[error("Malformed transport payload: {reason}")]
    MalformedTransport { reason: String },

    #[error("Invalid account id '{id}': {reason}")]
    InvalidAccountId { id: String, reason: String },

    #[error("Tuple nesting depth {depth} exceeds maximum {max}")]
    TupleDepthExceeded { depth: usize, max: usize },

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
