//! # noncework
//!
//! Collision-resistant nonces and a memoized hashcash-style proof-of-work.
//!
//! ## Overview
//!
//! - **Nonces**: Immutable, length-typed random identifiers with a bit-exact
//!   binary form and a URL-safe text form
//! - **Extension**: Prefix relation for commit-then-extend randomness
//! - **Effort**: A proof that `SHA-1(base || salts || proof)` has at least `N`
//!   leading zero bits, found once and memoized
//! - **Prover**: Runs searches on tokio's blocking pool with a time budget and
//!   cancellation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use noncework::{Effort, Nonce, Prover, ProverConfig};
//!
//! async fn example() -> noncework::Result<()> {
//!     let identity = Nonce::new_random(noncework::DEFAULT_LENGTH)?;
//!     let challenge = Nonce::new_random(4)?;
//!
//!     let prover = Prover::new(ProverConfig::default());
//!     let effort = Arc::new(Effort::new(16, &identity, [&challenge])?);
//!     let proof = prover.prove(Arc::clone(&effort)).await?;
//!
//!     // The verifier rebuilds the prefix from its raw encoding.
//!     let verifier = Effort::from_raw_base64(16, &effort.input_base64())?;
//!     verifier.verify(&proof)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `noncework::core` - Nonce types and codecs
//! - `noncework::effort` - The proof-of-work engine

pub mod error;
pub mod prover;

// Re-export component crates
pub use noncework_core as core;
pub use noncework_effort as effort;

pub use error::{ProverError, Result};
pub use prover::{Prover, ProverConfig};

// Re-export commonly used types
pub use noncework_core::{MutableNonce, Nonce, NonceError, DEFAULT_LENGTH, MAX_LENGTH};
pub use noncework_effort::{
    leading_zero_bits, Effort, EffortConfig, EffortError, EffortState, SearchOutcome,
};
