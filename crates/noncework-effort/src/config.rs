//! Configuration for effort searches.

use std::time::Duration;

use noncework_core::MAX_LENGTH;

/// Search parameters for an [`Effort`](crate::Effort).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffortConfig {
    /// Length of the proof nonce in bytes. Also bounds the attainable effort
    /// to `8 * proof_length` bits.
    pub proof_length: usize,
    /// Wall-clock budget used by [`Effort::proof`](crate::Effort::proof).
    /// `None` searches until a proof is found.
    pub time_budget: Option<Duration>,
}

impl Default for EffortConfig {
    fn default() -> Self {
        Self {
            proof_length: MAX_LENGTH,
            time_budget: None,
        }
    }
}

impl EffortConfig {
    /// Set the proof length.
    pub fn proof_length(mut self, proof_length: usize) -> Self {
        self.proof_length = proof_length;
        self
    }

    /// Set the time budget.
    pub fn time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EffortConfig::default();
        assert_eq!(config.proof_length, 254);
        assert_eq!(config.time_budget, None);
    }

    #[test]
    fn test_builder() {
        let config = EffortConfig::default()
            .proof_length(18)
            .time_budget(Duration::from_millis(50));
        assert_eq!(config.proof_length, 18);
        assert_eq!(config.time_budget, Some(Duration::from_millis(50)));
    }
}
