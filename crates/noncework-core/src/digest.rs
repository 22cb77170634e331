//! SHA-1 digest wrapped with strong types.
//!
//! SHA-1 is used as an opaque 160-bit digest for identifier derivation and
//! for the proof-of-work puzzle. It is not relied on for collision resistance
//! against a chosen-prefix attacker.

use sha1::{Digest, Sha1};
use std::fmt;

/// Output width of the digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// Output width of the digest in bits.
pub const DIGEST_BITS: u32 = (DIGEST_LEN * 8) as u32;

/// A 20-byte SHA-1 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sha1Digest(pub [u8; DIGEST_LEN]);

impl Sha1Digest {
    /// Compute the SHA-1 digest of the given data.
    pub fn hash(data: &[u8]) -> Self {
        Self(Sha1::digest(data).into())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Sha1Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SHA1({}...)", &self.to_hex()[..8])
    }
}

impl AsRef<[u8]> for Sha1Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for Sha1Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

/// Incremental SHA-1 hasher that resets itself on every finalize.
///
/// Reusing one hasher across trials avoids re-initializing state in the
/// proof-of-work loop.
#[derive(Clone, Default)]
pub struct Hasher {
    inner: Sha1,
}

impl Hasher {
    /// Create a fresh hasher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed more data into the hasher.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Produce the digest and reset to the initial state.
    pub fn finalize_reset(&mut self) -> Sha1Digest {
        Sha1Digest(self.inner.finalize_reset().into())
    }
}

impl fmt::Debug for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hasher(SHA-1)")
    }
}
