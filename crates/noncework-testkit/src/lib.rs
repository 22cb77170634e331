//! # noncework testkit
//!
//! Testing utilities for noncework.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Fixed inputs with expected bytes for cross-implementation checks
//! - **Generators**: Proptest strategies for nonces and efforts
//! - **Fixtures**: Seeded nonce sets for prover/verifier scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use noncework_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok) in verify_all_vectors() {
//!     assert!(ok, "{name}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use noncework_testkit::generators::{effort_from_params, EffortParams};
//!
//! proptest! {
//!     #[test]
//!     fn proofs_verify(params: EffortParams) {
//!         let effort = effort_from_params(&params);
//!         let proof = effort.get_proof(0).unwrap().unwrap();
//!         prop_assert!(effort.verify(proof).is_ok());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use noncework_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::with_seed(7);
//! let effort = fixture.make_effort(4);
//! assert_eq!(effort.input_prefix().len(), 22);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_party_fixtures, TestFixture};
pub use generators::{effort_from_params, EffortParams};
pub use vectors::{binary_vectors, effort_vectors, hash_vectors, verify_all_vectors};
