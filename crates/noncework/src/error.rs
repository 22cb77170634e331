//! Error types for the prover.

use noncework_core::NonceError;
use noncework_effort::EffortError;
use thiserror::Error;

/// Errors that can occur while producing a proof.
#[derive(Debug, Error)]
pub enum ProverError {
    /// Nonce error.
    #[error("nonce error: {0}")]
    Nonce(#[from] NonceError),

    /// Effort construction or verification error.
    #[error("effort error: {0}")]
    Effort(#[from] EffortError),

    /// The configured time budget ran out.
    #[error("proof search timed out")]
    TimedOut,

    /// The prover was cancelled.
    #[error("proof search cancelled")]
    Cancelled,

    /// The blocking search task failed to complete.
    #[error("search task failed: {0}")]
    Join(String),
}

/// Result type for prover operations.
pub type Result<T> = std::result::Result<T, ProverError>;
