//! Nonce: an immutable, length-typed random identifier.
//!
//! Length is part of identity. Two nonces of different lengths are never
//! equal, and the length-0 [`Nonce::zero`] sentinel can never collide with a
//! generated nonce.
//!
//! # Ordering
//!
//! Nonces order by length first, then byte-wise with each byte read as a
//! *signed* 8-bit integer. `0x80` sorts before `0x7f`. Peers depend on this
//! exact order; do not replace it with unsigned comparison.

use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::OnceLock;

use crate::binary;
use crate::digest::Sha1Digest;
use crate::error::{NonceError, Result};
use crate::text;
use crate::MAX_LENGTH;

/// An immutable nonce with a lazily cached text form.
#[derive(Clone)]
pub struct Nonce {
    bytes: Box<[u8]>,
    text: OnceLock<String>,
}

/// Reject lengths outside `1..=MAX_LENGTH`.
pub(crate) fn check_length(length: usize) -> Result<()> {
    if length == 0 || length > MAX_LENGTH {
        return Err(NonceError::InvalidLength { length });
    }
    Ok(())
}

impl Nonce {
    pub(crate) fn from_boxed(bytes: Box<[u8]>) -> Self {
        Self {
            bytes,
            text: OnceLock::new(),
        }
    }

    /// The length-0 sentinel.
    pub fn zero() -> Self {
        Self::from_boxed(Box::default())
    }

    /// Draw `length` bytes from the thread-local CSPRNG.
    pub fn new_random(length: usize) -> Result<Self> {
        Self::new_random_with(length, &mut rand::thread_rng())
    }

    /// Draw `length` bytes from the given CSPRNG.
    pub fn new_random_with<R: RngCore + CryptoRng>(length: usize, rng: &mut R) -> Result<Self> {
        check_length(length)?;
        let mut bytes = vec![0u8; length];
        rng.fill_bytes(&mut bytes);
        Ok(Self::from_boxed(bytes.into_boxed_slice()))
    }

    /// Derive `length` bytes from the SHA-1 digest of `input`.
    ///
    /// Digest bytes are repeated cyclically when `length` exceeds the digest
    /// width. The same `(input, length)` always yields the same nonce.
    pub fn new_from_string_hash(input: &str, length: usize) -> Result<Self> {
        check_length(length)?;
        let digest = Sha1Digest::hash(input.as_bytes());
        let bytes: Box<[u8]> = digest.0.iter().copied().cycle().take(length).collect();
        Ok(Self::from_boxed(bytes))
    }

    /// Build a nonce with explicit content.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        check_length(bytes.len())?;
        Ok(Self::from_boxed(bytes.into()))
    }

    /// Decode the binary form starting at `offset`.
    ///
    /// A zero-length header yields the [`Nonce::zero`] sentinel.
    pub fn from_binary(buf: &[u8], offset: usize) -> Result<Self> {
        let content = binary::content_at(buf, offset)?;
        Ok(Self::from_boxed(content.into()))
    }

    /// Decode the text form. Accepts either base64 alphabet and padding.
    pub fn from_text(input: &str) -> Result<Self> {
        let (bytes, canonical) = text::decode(input)?;
        if bytes.len() > MAX_LENGTH {
            return Err(NonceError::InvalidLength {
                length: bytes.len(),
            });
        }
        let nonce = Self::from_boxed(bytes.into_boxed_slice());
        let _ = nonce.text.set(canonical);
        Ok(nonce)
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether this is the zero sentinel.
    pub fn is_zero(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Same as [`Nonce::is_zero`].
    pub fn is_empty(&self) -> bool {
        self.is_zero()
    }

    /// The raw content bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size of the binary form: content length plus the header byte.
    pub fn length_as_binary(&self) -> usize {
        self.bytes.len() + 1
    }

    /// Write the binary form at `offset`, returning the number of bytes written.
    pub fn write_binary(&self, buf: &mut [u8], offset: usize) -> Result<usize> {
        binary::write_at(&self.bytes, buf, offset)
    }

    /// The binary form as a fresh buffer.
    pub fn to_binary(&self) -> Vec<u8> {
        let mut buf = vec![0u8; self.length_as_binary()];
        buf[0] = binary::encode_length(self.bytes.len());
        buf[1..].copy_from_slice(&self.bytes);
        buf
    }

    /// The canonical text form, computed once and cached.
    pub fn to_text(&self) -> &str {
        self.text.get_or_init(|| text::encode(&self.bytes))
    }

    /// Same length and identical bytes.
    pub fn equals_nonce(&self, other: &Nonce) -> bool {
        self.bytes == other.bytes
    }

    /// Compare against a binary form at `offset` without allocating.
    ///
    /// Malformed or truncated input compares unequal.
    pub fn equals_binary(&self, buf: &[u8], offset: usize) -> bool {
        binary::content_at(buf, offset).is_ok_and(|content| content == &*self.bytes)
    }

    /// Compare against a text form.
    ///
    /// On a match the normalized text is adopted as the cached text form if
    /// none was cached yet.
    pub fn equals_text(&self, input: &str) -> bool {
        match text::decode(input) {
            Ok((bytes, canonical)) if bytes == &*self.bytes => {
                let _ = self.text.set(canonical);
                true
            }
            _ => false,
        }
    }

    /// A new nonce that starts with these bytes followed by `extra` random bytes.
    pub fn extend_with_bytes(&self, extra: usize) -> Result<Self> {
        self.extend_with_bytes_from(extra, &mut rand::thread_rng())
    }

    /// As [`Nonce::extend_with_bytes`], drawing from the given CSPRNG.
    pub fn extend_with_bytes_from<R: RngCore + CryptoRng>(
        &self,
        extra: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let total = self.bytes.len() + extra;
        if total > MAX_LENGTH {
            return Err(NonceError::LengthOverflow {
                base: self.bytes.len(),
                extra,
            });
        }
        let mut bytes = Vec::with_capacity(total);
        bytes.extend_from_slice(&self.bytes);
        bytes.resize(total, 0);
        rng.fill_bytes(&mut bytes[self.bytes.len()..]);
        Ok(Self::from_boxed(bytes.into_boxed_slice()))
    }

    /// True if `other` is at least as long and starts with these bytes.
    pub fn is_base_of(&self, other: &Nonce) -> bool {
        other.bytes.starts_with(&self.bytes)
    }

    /// True if `other` is a base of this nonce.
    pub fn is_extension_of(&self, other: &Nonce) -> bool {
        other.is_base_of(self)
    }

    /// Cheap bucketing value from the length and first three bytes.
    ///
    /// Not suitable for anything but hash tables.
    pub fn bucket_hash(&self) -> u32 {
        let mut h = (self.bytes.len() as u32) << 24;
        for (i, &b) in self.bytes.iter().take(3).enumerate() {
            h |= u32::from(b) << (16 - 8 * i);
        }
        h ^= h >> 16;
        h = h.wrapping_mul(0x045d_9f3b);
        h ^ (h >> 16)
    }
}

/// Lexicographic comparison with bytes read as `i8`.
fn signed_cmp(a: &[u8], b: &[u8]) -> Ordering {
    a.iter().map(|&x| x as i8).cmp(b.iter().map(|&x| x as i8))
}

impl Default for Nonce {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Nonce {
    fn eq(&self, other: &Self) -> bool {
        self.equals_nonce(other)
    }
}

impl Eq for Nonce {}

impl Ord for Nonce {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bytes
            .len()
            .cmp(&other.bytes.len())
            .then_with(|| signed_cmp(&self.bytes, &other.bytes))
    }
}

impl PartialOrd for Nonce {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Nonce {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.bucket_hash());
    }
}

impl fmt::Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.bytes.len().min(8);
        write!(f, "Nonce({}:{}", self.bytes.len(), hex::encode(&self.bytes[..shown]))?;
        if shown < self.bytes.len() {
            f.write_str("...")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_text())
    }
}

impl FromStr for Nonce {
    type Err = NonceError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

impl AsRef<[u8]> for Nonce {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Serialize for Nonce {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_text())
    }
}

impl<'de> Deserialize<'de> for Nonce {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_text(&s).map_err(serde::de::Error::custom)
    }
}
