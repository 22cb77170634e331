//! The proof search loop.
//!
//! Each trial draws a fresh random candidate, places it after the input
//! prefix, and hashes the whole buffer. The search is randomized rather than
//! enumerative, so two efforts over the same input generally find different
//! proofs. A search that times out or is cancelled keeps no partial state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use noncework_core::{Hasher, MutableNonce, Nonce};

use crate::effort::{state, Effort, Solution};
use crate::error::Result;
use crate::verify::leading_zero_bits;

/// Outcome of a single search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// A proof is available (found now or memoized earlier).
    Found(&'a Nonce),
    /// The time budget ran out first.
    TimedOut,
    /// The cancellation flag was raised first.
    Cancelled,
}

impl<'a> SearchOutcome<'a> {
    /// The proof, if one was found.
    pub fn proof(self) -> Option<&'a Nonce> {
        match self {
            SearchOutcome::Found(proof) => Some(proof),
            _ => None,
        }
    }
}

impl Effort {
    /// Get the proof, searching for at most `max_millis` milliseconds.
    ///
    /// `0` means no limit. Returns `None` on timeout. A memoized proof is
    /// returned immediately regardless of the limit.
    pub fn get_proof(&self, max_millis: u64) -> Result<Option<&Nonce>> {
        let budget = (max_millis > 0).then(|| Duration::from_millis(max_millis));
        Ok(self.search(budget, None)?.proof())
    }

    /// Get the proof using the configured time budget.
    pub fn proof(&self) -> Result<Option<&Nonce>> {
        Ok(self.search(self.config.time_budget, None)?.proof())
    }

    /// Search for a proof until found, out of time, or cancelled.
    ///
    /// The deadline and the cancellation flag are both checked once per
    /// trial. Concurrent searches on a shared instance race; every caller
    /// observes the first published proof.
    pub fn search(
        &self,
        budget: Option<Duration>,
        cancel: Option<&AtomicBool>,
    ) -> Result<SearchOutcome<'_>> {
        if let Some(solution) = self.solution.get() {
            return Ok(SearchOutcome::Found(&solution.proof));
        }

        let mut candidate = MutableNonce::new(self.config.proof_length)?;
        let prefix_len = self.prefix.len();
        let mut input = Vec::with_capacity(prefix_len + candidate.len());
        input.extend_from_slice(&self.prefix);
        input.resize(prefix_len + candidate.len(), 0);

        let start = Instant::now();
        let deadline = budget.and_then(|b| start.checked_add(b));
        let mut rng = rand::thread_rng();
        let mut hasher = Hasher::new();
        let mut trials: u64 = 0;

        self.state.store(state::SEARCHING, Ordering::Release);
        tracing::debug!(
            bits = self.bits,
            prefix_len,
            proof_len = candidate.len(),
            ?budget,
            "starting effort search"
        );

        loop {
            if let Some(solution) = self.solution.get() {
                return Ok(SearchOutcome::Found(&solution.proof));
            }
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                tracing::debug!(trials, "effort search cancelled");
                return Ok(self.abandon(state::CANCELLED, SearchOutcome::Cancelled));
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                tracing::debug!(trials, elapsed = ?start.elapsed(), "effort search timed out");
                return Ok(self.abandon(state::TIMED_OUT, SearchOutcome::TimedOut));
            }

            candidate.regenerate_with(&mut rng);
            input[prefix_len..].copy_from_slice(candidate.as_bytes());
            let digest = hasher.update(&input).finalize_reset();
            trials += 1;
            self.trials.fetch_add(1, Ordering::Relaxed);

            if leading_zero_bits(digest.as_bytes()) >= self.bits {
                let elapsed = start.elapsed();
                let solution = self.solution.get_or_init(|| Solution {
                    proof: candidate.freeze(),
                    trials,
                    elapsed,
                });
                self.state.store(state::FOUND, Ordering::Release);
                tracing::debug!(bits = self.bits, trials, ?elapsed, "effort proof found");
                return Ok(SearchOutcome::Found(&solution.proof));
            }
        }
    }

    /// Record an unsuccessful exit unless another search already published.
    fn abandon<'a>(&'a self, exit_state: u8, outcome: SearchOutcome<'a>) -> SearchOutcome<'a> {
        match self.solution.get() {
            Some(solution) => SearchOutcome::Found(&solution.proof),
            None => {
                self.state.store(exit_state, Ordering::Release);
                outcome
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EffortConfig;
    use crate::effort::EffortState;
    use noncework_core::{Sha1Digest, DEFAULT_LENGTH, MAX_LENGTH};
    use std::sync::Arc;

    fn effort(bits: u32) -> Effort {
        let base = Nonce::new_random(DEFAULT_LENGTH).unwrap();
        let salt = Nonce::new_random(4).unwrap();
        Effort::new(bits, &base, [&salt]).unwrap()
    }

    #[test]
    fn test_zero_bits_takes_one_trial() {
        let effort = effort(0);
        let proof = effort.get_proof(0).unwrap().unwrap();
        assert_eq!(effort.trials(), 1);
        assert_eq!(proof.len(), MAX_LENGTH);
        assert_eq!(effort.state(), EffortState::Found);
        assert!(effort.elapsed().is_some());
    }

    #[test]
    fn test_eight_bits_zero_first_byte() {
        let effort = effort(8);
        let proof = effort.get_proof(0).unwrap().unwrap().clone();

        let mut input = effort.input_prefix().to_vec();
        input.extend_from_slice(proof.as_bytes());
        let digest = Sha1Digest::hash(&input);
        assert_eq!(digest.as_bytes()[0], 0x00);
        assert!(effort.trials() >= 1);
        assert_eq!(effort.solution().unwrap().trials, effort.trials());
    }

    #[test]
    fn test_memoized_proof_is_same_object() {
        let effort = effort(6);
        let first = effort.get_proof(0).unwrap().unwrap() as *const Nonce;
        let trials = effort.trials();
        let second = effort.get_proof(1).unwrap().unwrap() as *const Nonce;
        assert_eq!(first, second);
        assert_eq!(effort.trials(), trials);
    }

    #[test]
    fn test_independent_instances_differ() {
        let base = Nonce::new_random(DEFAULT_LENGTH).unwrap();
        let a = Effort::new(2, &base, []).unwrap();
        let b = Effort::new(2, &base, []).unwrap();
        assert_ne!(a.get_proof(0).unwrap(), b.get_proof(0).unwrap());
    }

    #[test]
    fn test_timeout_yields_none_and_no_credit() {
        let effort = effort(160);
        let outcome = effort.search(Some(Duration::from_millis(20)), None).unwrap();
        assert_eq!(outcome, SearchOutcome::TimedOut);
        assert_eq!(effort.state(), EffortState::TimedOut);
        assert!(effort.trials() > 0);
        assert!(effort.elapsed().is_none());
        assert!(effort.get_proof(5).unwrap().is_none());
    }

    #[test]
    fn test_timed_out_search_leaves_nothing_to_resume() {
        // Starts unreachable so the first search is guaranteed to spend trials and time out.
        let mut effort = effort(160);
        let outcome = effort.search(Some(Duration::from_millis(5)), None).unwrap();
        assert_eq!(outcome, SearchOutcome::TimedOut);
        assert_eq!(effort.state(), EffortState::TimedOut);
        let wasted = effort.trials();
        assert!(wasted > 0);

        effort.bits = 4;
        let proof = effort.get_proof(0).unwrap().unwrap().clone();
        assert_eq!(effort.state(), EffortState::Found);
        assert!(effort.verify(&proof).unwrap() >= 4);

        let solution = effort.solution().unwrap();
        assert_eq!(solution.trials, effort.trials() - wasted);
        assert!(effort.trials() > solution.trials);
    }

    #[test]
    fn test_zero_budget_times_out_then_unbounded_finds() {
        let effort = effort(4);
        assert_eq!(
            effort.search(Some(Duration::ZERO), None).unwrap(),
            SearchOutcome::TimedOut
        );
        assert_eq!(effort.trials(), 0);
        assert!(effort.get_proof(0).unwrap().is_some());
        assert_eq!(effort.solution().unwrap().trials, effort.trials());
    }

    #[test]
    fn test_late_exit_state_does_not_hide_proof() {
        let effort = effort(4);
        let proof = effort.get_proof(0).unwrap().unwrap().clone();

        // A losing searcher that passed its solution check before the publish.
        effort.state.store(state::TIMED_OUT, Ordering::Release);
        assert_eq!(effort.state(), EffortState::Found);

        let outcome = effort.abandon(state::CANCELLED, SearchOutcome::Cancelled);
        assert_eq!(outcome, SearchOutcome::Found(&proof));
        assert_eq!(effort.state(), EffortState::Found);
    }

    #[test]
    fn test_configured_budget() {
        let effort = effort(160)
            .with_config(EffortConfig::default().time_budget(Duration::from_millis(10)))
            .unwrap();
        assert!(effort.proof().unwrap().is_none());
    }

    #[test]
    fn test_cancelled_before_first_trial() {
        let effort = effort(8);
        let flag = AtomicBool::new(true);
        assert_eq!(effort.search(None, Some(&flag)).unwrap(), SearchOutcome::Cancelled);
        assert_eq!(effort.state(), EffortState::Cancelled);
        assert_eq!(effort.trials(), 0);

        // A later unbounded search still succeeds.
        assert!(effort.get_proof(0).unwrap().is_some());
    }

    #[test]
    fn test_short_proof_length() {
        let effort = effort(4)
            .with_config(EffortConfig::default().proof_length(DEFAULT_LENGTH))
            .unwrap();
        let proof = effort.get_proof(0).unwrap().unwrap();
        assert_eq!(proof.len(), DEFAULT_LENGTH);
        assert!(effort.verify(proof).is_ok());
    }

    #[test]
    fn test_concurrent_searches_agree() {
        let effort = Arc::new(effort(10));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let effort = Arc::clone(&effort);
                std::thread::spawn(move || effort.get_proof(0).unwrap().cloned())
            })
            .collect();
        let proofs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for proof in &proofs {
            assert_eq!(proof, &proofs[0]);
        }
        assert_eq!(effort.get_proof(0).unwrap().cloned(), proofs[0]);
    }
}
