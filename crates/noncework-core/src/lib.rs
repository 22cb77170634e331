//! # noncework core
//!
//! Pure primitives for noncework: length-typed nonces and their encodings.
//!
//! This crate performs no I/O and spawns no threads.
//!
//! ## Key Types
//!
//! - [`Nonce`] - Immutable random identifier; length is part of its identity
//! - [`MutableNonce`] - Re-randomizable scratch buffer, frozen into a [`Nonce`]
//! - [`Sha1Digest`] / [`Hasher`] - The 160-bit digest used for derivation and proof-of-work
//!
//! ## Encodings
//!
//! - Binary: one signed length byte (`len + i8::MIN`) then the content. See [`binary`].
//! - Text: unpadded URL-safe base64, also accepting the standard alphabet. See [`text`].
//!
//! ## Ordering
//!
//! Shorter nonces sort first; equal lengths compare bytes as **signed** `i8`.

pub mod binary;
pub mod digest;
pub mod error;
pub mod mutable;
pub mod nonce;
pub mod text;

pub use digest::{Hasher, Sha1Digest, DIGEST_BITS, DIGEST_LEN};
pub use error::{NonceError, Result};
pub use mutable::MutableNonce;
pub use nonce::Nonce;

/// Maximum content length of a nonce in bytes.
pub const MAX_LENGTH: usize = 254;

/// Conventional content length for freshly generated nonces.
pub const DEFAULT_LENGTH: usize = 18;
