//! Proof verification.
//!
//! Verification is a single digest over `prefix || proof`, compared against
//! the required number of leading zero bits.

use noncework_core::{Hasher, Nonce, Sha1Digest};

use crate::effort::Effort;
use crate::error::{EffortError, Result};

/// Count leading zero bits, scanning from the most significant bit of byte 0.
///
/// Each zero byte contributes 8; the first non-zero byte contributes its own
/// leading zeros and ends the scan.
pub fn leading_zero_bits(digest: &[u8]) -> u32 {
    let mut count = 0;
    for &byte in digest {
        if byte != 0 {
            return count + byte.leading_zeros();
        }
        count += 8;
    }
    count
}

impl Effort {
    /// Digest of the input prefix followed by `proof`.
    pub fn digest_with(&self, proof: &[u8]) -> Sha1Digest {
        Hasher::new().update(&self.prefix).update(proof).finalize_reset()
    }

    /// Check `proof` against this effort, returning the achieved bit count.
    pub fn verify(&self, proof: &Nonce) -> Result<u32> {
        let actual = leading_zero_bits(self.digest_with(proof.as_bytes()).as_bytes());
        if actual < self.bits {
            tracing::warn!(required = self.bits, actual, "proof rejected");
            return Err(EffortError::InsufficientEffort {
                required: self.bits,
                actual,
            });
        }
        Ok(actual)
    }
}
