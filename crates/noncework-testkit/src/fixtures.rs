//! Test fixtures and helpers.
//!
//! Common setup code for prover/verifier scenarios.

use rand::rngs::StdRng;
use rand::SeedableRng;

use noncework_core::{Nonce, DEFAULT_LENGTH};
use noncework_effort::Effort;

/// Length of the challenge salt issued by a verifier.
pub const CHALLENGE_LENGTH: usize = 4;

/// A base identity plus a verifier-issued challenge salt.
pub struct TestFixture {
    pub base: Nonce,
    pub challenge: Nonce,
}

impl TestFixture {
    /// Create a fixture with fresh random nonces.
    pub fn new() -> Self {
        Self {
            base: Nonce::new_random(DEFAULT_LENGTH).expect("default length is valid"),
            challenge: Nonce::new_random(CHALLENGE_LENGTH).expect("challenge length is valid"),
        }
    }

    /// Create a fixture with deterministic nonces from a seed.
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self {
            base: Nonce::new_random_with(DEFAULT_LENGTH, &mut rng)
                .expect("default length is valid"),
            challenge: Nonce::new_random_with(CHALLENGE_LENGTH, &mut rng)
                .expect("challenge length is valid"),
        }
    }

    /// Build the prover-side effort over `base || challenge`.
    pub fn make_effort(&self, bits: u32) -> Effort {
        Effort::new(bits, &self.base, [&self.challenge]).expect("bits within bounds")
    }

    /// Build the verifier-side effort from the raw prefix encoding.
    pub fn make_verifier(&self, bits: u32) -> Effort {
        let prover = self.make_effort(bits);
        Effort::from_raw_base64(bits, &prover.input_base64()).expect("prefix encodes cleanly")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple fixtures for multi-party tests.
pub fn multi_party_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count as u64).map(TestFixture::with_seed).collect()
}
