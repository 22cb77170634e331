//! The Prover: runs effort searches off the async runtime.
//!
//! Searches are CPU-bound and may run for a long time, so they execute on
//! tokio's blocking pool. The memoized proof is published by the effort
//! only after it is frozen; callers awaiting [`Prover::prove`] never see a
//! partially written candidate.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use noncework_core::Nonce;
use noncework_effort::{Effort, SearchOutcome};

use crate::error::{ProverError, Result};

/// Configuration for the Prover.
#[derive(Debug, Clone)]
pub struct ProverConfig {
    /// Wall-clock budget per search. `None` searches until found.
    pub time_budget: Option<Duration>,
    /// Re-verify each proof before returning it.
    pub verify_on_complete: bool,
}

impl Default for ProverConfig {
    fn default() -> Self {
        Self {
            time_budget: None,
            verify_on_complete: true,
        }
    }
}

/// Offloads proof searches to a blocking worker pool.
pub struct Prover {
    /// Configuration.
    config: ProverConfig,
    /// Raised to stop every in-flight search.
    cancel: Arc<AtomicBool>,
}

impl Prover {
    /// Create a new prover.
    pub fn new(config: ProverConfig) -> Self {
        Self {
            config,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ProverConfig {
        &self.config
    }

    /// Find (or fetch the memoized) proof for `effort`.
    pub async fn prove(&self, effort: Arc<Effort>) -> Result<Nonce> {
        if self.is_cancelled() {
            return Err(ProverError::Cancelled);
        }

        let budget = self.config.time_budget;
        let cancel = Arc::clone(&self.cancel);
        let task_effort = Arc::clone(&effort);

        let proof = tokio::task::spawn_blocking(move || -> Result<Nonce> {
            match task_effort.search(budget, Some(cancel.as_ref()))? {
                SearchOutcome::Found(proof) => Ok(proof.clone()),
                SearchOutcome::TimedOut => Err(ProverError::TimedOut),
                SearchOutcome::Cancelled => Err(ProverError::Cancelled),
            }
        })
        .await
        .map_err(|e| ProverError::Join(e.to_string()))??;

        if self.config.verify_on_complete {
            let achieved = effort.verify(&proof)?;
            tracing::debug!(bits = effort.bits(), achieved, "proof verified");
        }

        Ok(proof)
    }

    /// Build an effort over `base || salts` and prove it.
    pub async fn prove_for(&self, bits: u32, base: &Nonce, salts: &[Nonce]) -> Result<Nonce> {
        let effort = Arc::new(Effort::new(bits, base, salts)?);
        self.prove(effort).await
    }

    /// Stop all in-flight and future searches.
    pub fn cancel_all(&self) {
        tracing::debug!("cancelling all proof searches");
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Whether [`Prover::cancel_all`] has been called.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }
}

impl Default for Prover {
    fn default() -> Self {
        Self::new(ProverConfig::default())
    }
}
