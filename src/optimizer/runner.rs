use crate::config::SearchParams;
use crate::error::CfResult;
use crate::key::Key;
use crate::optimizer::budget::{Budget, StopReason};
use crate::optimizer::observer::SearchObserver;
use crate::optimizer::search::{KeySearch, SearchState};
use crate::scorer::FitnessModel;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub stagnation_limit: u32,
    pub report_interval: u64,
    pub seed: Option<u64>,
    pub budget: Budget,
}

impl From<&SearchParams> for SearchOptions {
    fn from(params: &SearchParams) -> Self {
        let mut budget = Budget::new(
            params.max_restarts,
            params.max_time_secs.map(Duration::from_secs),
            params.target_score,
        );
        if let Some(crib) = &params.crib {
            budget = budget.with_crib(crib);
        }

        Self {
            stagnation_limit: params.stagnation_limit,
            report_interval: params.report_interval,
            seed: params.seed,
            budget,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub key: Key,
    pub score: f32,
    pub plaintext: String,
    pub restarts: u64,
    pub trials: u64,
    pub elapsed_secs: f64,
    pub stop_reason: StopReason,
    /// Seed that reproduces this run.
    pub seed: u64,
}

/// Builds a `KeySearch` from options and runs it to its budget.
pub struct Optimizer {
    model: Arc<FitnessModel>,
    options: SearchOptions,
}

impl Optimizer {
    pub fn new(model: Arc<FitnessModel>, options: SearchOptions) -> Self {
        Self { model, options }
    }

    pub fn run<O: SearchObserver + ?Sized>(
        &self,
        ciphertext: &[u8],
        observer: &O,
    ) -> CfResult<SearchOutcome> {
        let opts = &self.options;
        // Always run seeded so the outcome can be replayed.
        let seed = opts.seed.unwrap_or_else(|| fastrand::u64(..));

        if !opts.budget.is_bounded() {
            warn!("⚠️  No stop condition configured; searching until interrupted.");
        }

        let mut search = KeySearch::new(&self.model, ciphertext, Some(seed))?
            .with_stagnation_limit(opts.stagnation_limit)
            .with_report_interval(opts.report_interval);

        debug!(
            "Search: {} letters, stagnation limit {}, seed {}",
            ciphertext.len(),
            opts.stagnation_limit,
            seed
        );

        let mut budget = opts.budget.clone();
        let started = Instant::now();
        let state = search.run(SearchState::new(), &mut budget, observer);
        let elapsed = started.elapsed();

        Ok(SearchOutcome {
            key: state.best_key,
            score: state.best_score,
            plaintext: state.plaintext(),
            restarts: state.restarts,
            trials: state.trials,
            elapsed_secs: elapsed.as_secs_f64(),
            stop_reason: budget.triggered().unwrap_or(StopReason::Predicate),
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_carry_every_stop_condition() {
        let params = SearchParams {
            max_restarts: Some(12),
            max_time_secs: Some(30),
            target_score: Some(0.5),
            crib: Some("the end".to_string()),
            seed: Some(3),
            stagnation_limit: 250,
            ..Default::default()
        };
        let opts = SearchOptions::from(&params);

        assert_eq!(opts.budget.max_restarts, Some(12));
        assert_eq!(opts.budget.max_time, Some(Duration::from_secs(30)));
        assert_eq!(opts.budget.target_score, Some(0.5));
        assert_eq!(opts.budget.crib(), Some(&b"THEEND"[..]));
        assert_eq!(opts.budget.triggered(), None);
        assert_eq!(opts.seed, Some(3));
        assert_eq!(opts.stagnation_limit, 250);
    }

    #[test]
    fn test_default_params_are_unbounded() {
        let opts = SearchOptions::from(&SearchParams::default());
        assert!(!opts.budget.is_bounded());
        assert_eq!(opts.seed, None);
    }
}
