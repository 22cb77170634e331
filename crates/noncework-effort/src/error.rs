//! Error types for the effort engine.

use noncework_core::NonceError;
use thiserror::Error;

/// Errors that can occur while building, searching, or verifying an effort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EffortError {
    /// The requested effort exceeds the entropy of the proof (8 bits per byte).
    #[error("effort of {bits} bits exceeds the {max}-bit proof entropy")]
    EffortTooHigh { bits: u32, max: u32 },

    /// The requested effort exceeds the width of the digest.
    #[error("effort of {bits} bits exceeds the {digest_bits}-bit digest")]
    ExceedsDigest { bits: u32, digest_bits: u32 },

    /// A proof did not reach the required number of leading zero bits.
    #[error("insufficient effort: required {required} bits, got {actual}")]
    InsufficientEffort { required: u32, actual: u32 },

    /// Invalid nonce input or configuration.
    #[error("nonce error: {0}")]
    Nonce(#[from] NonceError),
}

/// Result type for effort operations.
pub type Result<T> = std::result::Result<T, EffortError>;
