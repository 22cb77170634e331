//! Error types for noncework core.

use thiserror::Error;

/// Errors that can occur while constructing or decoding a nonce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NonceError {
    /// Requested content length is outside the permitted range.
    #[error("invalid nonce length: {length} (expected 1..={max})", max = crate::MAX_LENGTH)]
    InvalidLength { length: usize },

    /// A binary buffer ended before the declared content did.
    #[error("truncated nonce: need {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },

    /// The length header of a binary nonce declares more than the maximum.
    #[error("invalid binary length header: {0:#04x}")]
    InvalidBinaryHeader(u8),

    /// Malformed text representation.
    #[error("decoding error: {0}")]
    Decode(String),

    /// Extending a nonce would exceed the maximum length.
    #[error("cannot extend nonce of length {base} by {extra} bytes")]
    LengthOverflow { base: usize, extra: usize },
}

/// Result type for nonce operations.
pub type Result<T> = std::result::Result<T, NonceError>;
