//! # noncework effort
//!
//! Hashcash-style proof-of-work built on noncework nonces.
//!
//! An [`Effort`] fixes an input prefix (a base nonce followed by zero or more
//! salt nonces) and a required effort `N`. Its proof is a nonce such that
//! `SHA-1(prefix || proof)` has at least `N` leading zero bits. Finding one
//! takes about `2^N` digests; checking it takes one.
//!
//! ## Lifecycle
//!
//! ```text
//! Unsearched -> Searching -> Found
//!                         -> TimedOut | Cancelled  (search may be retried)
//! ```
//!
//! The first proof found is memoized; later calls return the same nonce.
//!
//! ## Usage
//!
//! ```rust
//! use noncework_core::Nonce;
//! use noncework_effort::Effort;
//!
//! let base = Nonce::new_random(18).unwrap();
//! let challenge = Nonce::new_random(4).unwrap();
//! let effort = Effort::new(8, &base, [&challenge]).unwrap();
//!
//! let proof = effort.get_proof(0).unwrap().expect("unbounded search");
//!
//! // The verifier only needs the raw prefix.
//! let verifier = Effort::from_raw_base64(8, &effort.input_base64()).unwrap();
//! assert!(verifier.verify(proof).is_ok());
//! ```

pub mod config;
pub mod effort;
pub mod error;
pub mod search;
pub mod verify;

pub use config::EffortConfig;
pub use effort::{max_bits_for, Effort, EffortState, Solution, MAX_EFFORT_BITS};
pub use error::{EffortError, Result};
pub use search::SearchOutcome;
pub use verify::leading_zero_bits;
