//! Mutable scratch nonce used by iterative searches.
//!
//! A [`MutableNonce`] owns a reusable buffer that can be re-randomized in
//! place. [`MutableNonce::freeze`] consumes it and yields an immutable
//! [`Nonce`], so no mutation is possible after the value is published.

use rand::{CryptoRng, RngCore};
use std::fmt;

use crate::error::Result;
use crate::nonce::{check_length, Nonce};

/// A fixed-length, in-place re-randomizable byte buffer.
pub struct MutableNonce {
    buf: Vec<u8>,
}

impl MutableNonce {
    /// Allocate a buffer of `length` random bytes.
    pub fn new(length: usize) -> Result<Self> {
        check_length(length)?;
        let mut nonce = Self {
            buf: vec![0u8; length],
        };
        nonce.regenerate();
        Ok(nonce)
    }

    /// Refill the buffer from the thread-local CSPRNG.
    pub fn regenerate(&mut self) {
        self.regenerate_with(&mut rand::thread_rng());
    }

    /// Refill the buffer from the given CSPRNG.
    pub fn regenerate_with<R: RngCore + CryptoRng>(&mut self, rng: &mut R) {
        rng.fill_bytes(&mut self.buf);
    }

    /// Current content.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Always false: lengths start at 1.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Convert into an immutable nonce, releasing the scratch buffer.
    pub fn freeze(self) -> Nonce {
        Nonce::from_boxed(self.buf.into_boxed_slice())
    }
}

impl fmt::Debug for MutableNonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MutableNonce({})", self.buf.len())
    }
}
