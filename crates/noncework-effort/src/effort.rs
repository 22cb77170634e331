//! Effort: a memoized hashcash-style proof over a fixed input prefix.
//!
//! The input prefix is the concatenation of the base nonce's bytes followed
//! by each salt's bytes, in argument order, with no framing. A verifier must
//! rebuild the same byte sequence to check a proof; see
//! [`Effort::from_raw_base64`].

use std::fmt;
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::OnceLock;
use std::time::Duration;

use noncework_core::{text, Nonce, NonceError, DIGEST_BITS, MAX_LENGTH};

use crate::config::EffortConfig;
use crate::error::{EffortError, Result};

/// Upper bound on effort for the default proof length.
pub const MAX_EFFORT_BITS: u32 = max_bits_for(MAX_LENGTH);

/// The attainable effort for proofs of `proof_length` bytes.
///
/// Capped by both the proof's entropy and the digest width.
pub const fn max_bits_for(proof_length: usize) -> u32 {
    let entropy = (proof_length * 8) as u32;
    if entropy < DIGEST_BITS {
        entropy
    } else {
        DIGEST_BITS
    }
}

/// Where an effort is in its search lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffortState {
    /// No search has run yet.
    Unsearched,
    /// A search is running.
    Searching,
    /// A proof was found and memoized.
    Found,
    /// The last search ran out of time.
    TimedOut,
    /// The last search was cancelled.
    Cancelled,
}

pub(crate) mod state {
    pub const UNSEARCHED: u8 = 0;
    pub const SEARCHING: u8 = 1;
    pub const FOUND: u8 = 2;
    pub const TIMED_OUT: u8 = 3;
    pub const CANCELLED: u8 = 4;
}

/// A memoized search result.
#[derive(Debug, Clone)]
pub struct Solution {
    /// The proof nonce.
    pub proof: Nonce,
    /// Trials spent by the search that found it.
    pub trials: u64,
    /// Wall-clock time spent by the search that found it.
    pub elapsed: Duration,
}

/// A proof-of-work puzzle over a fixed input prefix.
pub struct Effort {
    pub(crate) bits: u32,
    pub(crate) prefix: Vec<u8>,
    pub(crate) config: EffortConfig,
    pub(crate) solution: OnceLock<Solution>,
    pub(crate) trials: AtomicU64,
    pub(crate) state: AtomicU8,
}

impl Effort {
    /// Build an effort over `base` followed by each of `salts`.
    pub fn new<'a>(
        bits: u32,
        base: &Nonce,
        salts: impl IntoIterator<Item = &'a Nonce>,
    ) -> Result<Self> {
        let mut prefix = base.as_bytes().to_vec();
        for salt in salts {
            prefix.extend_from_slice(salt.as_bytes());
        }
        Self::from_raw(bits, prefix)
    }

    /// Build an effort directly over an already concatenated prefix.
    pub fn from_raw(bits: u32, prefix: Vec<u8>) -> Result<Self> {
        Self::build(bits, prefix, EffortConfig::default())
    }

    /// Build an effort over a base64-encoded prefix.
    ///
    /// Either base64 alphabet is accepted. The decoded bytes are used as-is;
    /// nonce boundaries inside them are not recoverable.
    pub fn from_raw_base64(bits: u32, encoded: &str) -> Result<Self> {
        let (prefix, _) = text::decode(encoded)?;
        Self::from_raw(bits, prefix)
    }

    /// Replace the search configuration, revalidating the effort level.
    ///
    /// Any memoized proof is discarded since its length may no longer match.
    pub fn with_config(self, config: EffortConfig) -> Result<Self> {
        Self::build(self.bits, self.prefix, config)
    }

    fn build(bits: u32, prefix: Vec<u8>, config: EffortConfig) -> Result<Self> {
        if config.proof_length == 0 || config.proof_length > MAX_LENGTH {
            return Err(NonceError::InvalidLength {
                length: config.proof_length,
            }
            .into());
        }
        let entropy = (config.proof_length * 8) as u32;
        if bits > entropy {
            return Err(EffortError::EffortTooHigh { bits, max: entropy });
        }
        if bits > DIGEST_BITS {
            return Err(EffortError::ExceedsDigest {
                bits,
                digest_bits: DIGEST_BITS,
            });
        }
        Ok(Self {
            bits,
            prefix,
            config,
            solution: OnceLock::new(),
            trials: AtomicU64::new(0),
            state: AtomicU8::new(state::UNSEARCHED),
        })
    }

    /// Required number of leading zero bits.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// The input prefix the proof is appended to.
    pub fn input_prefix(&self) -> &[u8] {
        &self.prefix
    }

    /// The input prefix in canonical base64, as consumed by
    /// [`Effort::from_raw_base64`].
    pub fn input_base64(&self) -> String {
        text::encode(&self.prefix)
    }

    /// The active configuration.
    pub fn config(&self) -> &EffortConfig {
        &self.config
    }

    /// Current lifecycle state.
    ///
    /// A memoized proof always reports `Found`, whatever a losing searcher
    /// stored on its way out.
    pub fn state(&self) -> EffortState {
        if self.solution.get().is_some() {
            return EffortState::Found;
        }
        match self.state.load(Ordering::Acquire) {
            state::SEARCHING => EffortState::Searching,
            state::FOUND => EffortState::Found,
            state::TIMED_OUT => EffortState::TimedOut,
            state::CANCELLED => EffortState::Cancelled,
            _ => EffortState::Unsearched,
        }
    }

    /// Total digest evaluations across all searches on this instance.
    pub fn trials(&self) -> u64 {
        self.trials.load(Ordering::Relaxed)
    }

    /// Search time of the successful search, if any.
    pub fn elapsed(&self) -> Option<Duration> {
        self.solution.get().map(|s| s.elapsed)
    }

    /// The memoized solution, if a proof has been found.
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.get()
    }
}

impl fmt::Debug for Effort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Effort")
            .field("bits", &self.bits)
            .field("prefix_len", &self.prefix.len())
            .field("state", &self.state())
            .field("trials", &self.trials())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noncework_core::DEFAULT_LENGTH;

    #[test]
    fn test_prefix_concatenation_order() {
        let base = Nonce::from_bytes(&[1; DEFAULT_LENGTH]).unwrap();
        let salt = Nonce::from_bytes(&[2, 3, 4, 5]).unwrap();
        let effort = Effort::new(8, &base, [&salt]).unwrap();

        assert_eq!(effort.input_prefix().len(), 22);
        assert_eq!(&effort.input_prefix()[..18], &[1; 18]);
        assert_eq!(&effort.input_prefix()[18..], &[2, 3, 4, 5]);
    }

    #[test]
    fn test_multiple_salts_in_argument_order() {
        let base = Nonce::from_bytes(&[9]).unwrap();
        let a = Nonce::from_bytes(&[1, 1]).unwrap();
        let b = Nonce::from_bytes(&[2]).unwrap();
        let effort = Effort::new(0, &base, [&a, &b]).unwrap();
        assert_eq!(effort.input_prefix(), &[9, 1, 1, 2]);

        let swapped = Effort::new(0, &base, [&b, &a]).unwrap();
        assert_eq!(swapped.input_prefix(), &[9, 2, 1, 1]);
    }

    #[test]
    fn test_no_salts() {
        let base = Nonce::new_random(DEFAULT_LENGTH).unwrap();
        let effort = Effort::new(4, &base, []).unwrap();
        assert_eq!(effort.input_prefix(), base.as_bytes());
    }

    #[test]
    fn test_raw_base64_matches_typed() {
        let base = Nonce::new_random(DEFAULT_LENGTH).unwrap();
        let salt = Nonce::new_random(4).unwrap();
        let typed = Effort::new(12, &base, [&salt]).unwrap();

        let raw = Effort::from_raw_base64(12, &typed.input_base64()).unwrap();
        assert_eq!(raw.input_prefix(), typed.input_prefix());
        assert_eq!(raw.bits(), 12);
    }

    #[test]
    fn test_raw_base64_malformed() {
        assert!(matches!(
            Effort::from_raw_base64(8, "***"),
            Err(EffortError::Nonce(NonceError::Decode(_)))
        ));
    }

    #[test]
    fn test_effort_bounds() {
        let base = Nonce::new_random(DEFAULT_LENGTH).unwrap();
        assert!(Effort::new(0, &base, []).is_ok());
        assert!(Effort::new(MAX_EFFORT_BITS, &base, []).is_ok());
        assert_eq!(
            Effort::new(MAX_EFFORT_BITS + 1, &base, []).unwrap_err(),
            EffortError::ExceedsDigest {
                bits: 161,
                digest_bits: 160
            }
        );
        assert_eq!(
            Effort::new(8 * MAX_LENGTH as u32 + 1, &base, []).unwrap_err(),
            EffortError::EffortTooHigh {
                bits: 2033,
                max: 2032
            }
        );
    }

    #[test]
    fn test_config_bounds_effort_by_proof_length() {
        let base = Nonce::new_random(DEFAULT_LENGTH).unwrap();
        let config = EffortConfig::default().proof_length(2);
        assert!(Effort::new(16, &base, []).unwrap().with_config(config.clone()).is_ok());
        assert_eq!(
            Effort::new(17, &base, []).unwrap().with_config(config).unwrap_err(),
            EffortError::EffortTooHigh { bits: 17, max: 16 }
        );
        assert!(Effort::new(1, &base, [])
            .unwrap()
            .with_config(EffortConfig::default().proof_length(0))
            .is_err());
    }

    #[test]
    fn test_initial_state() {
        let effort = Effort::from_raw(8, vec![1, 2, 3]).unwrap();
        assert_eq!(effort.state(), EffortState::Unsearched);
        assert_eq!(effort.trials(), 0);
        assert!(effort.elapsed().is_none());
        assert!(effort.solution().is_none());
    }
}
