use crate::consts::{DEFAULT_REPORT_INTERVAL, DEFAULT_STAGNATION_LIMIT};
use crate::error::{CfResult, CipherError};
use crate::key::Key;
use crate::optimizer::budget::StopCondition;
use crate::optimizer::mutation;
use crate::optimizer::observer::{NewBest, SearchObserver, Throughput};
use crate::scorer::FitnessModel;
use crate::text::ensure_letters;
use fastrand::Rng;
use std::time::Instant;

/// Best result across all restarts. Moved into `KeySearch::run` and handed
/// back when it returns, so a search can be resumed from a previous state.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub best_key: Key,
    pub best_score: f32,
    pub best_plaintext: Vec<u8>,
    pub restarts: u64,
    pub trials: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            best_key: Key::identity(),
            best_score: f32::INFINITY,
            best_plaintext: Vec::new(),
            restarts: 0,
            trials: 0,
        }
    }

    pub fn plaintext(&self) -> String {
        String::from_utf8_lossy(&self.best_plaintext).into_owned()
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClimbStats {
    pub trials: u64,
    pub accepted: u64,
}

/// Random-restart hill climber over substitution keys.
pub struct KeySearch<'a> {
    model: &'a FitnessModel,
    ciphertext: &'a [u8],
    // Sized once to the ciphertext; every decryption overwrites it.
    plaintext: Vec<u8>,
    parent_key: Key,
    parent_score: f32,
    rng: Rng,
    stagnation_limit: u32,
    report_interval: u64,
}

impl<'a> KeySearch<'a> {
    pub fn new(model: &'a FitnessModel, ciphertext: &'a [u8], seed: Option<u64>) -> CfResult<Self> {
        ensure_letters(ciphertext)?;
        if ciphertext.len() < model.n() {
            return Err(CipherError::ShortText {
                len: ciphertext.len(),
                n: model.n(),
            });
        }

        let rng = match seed {
            Some(s) => Rng::with_seed(s),
            None => Rng::new(),
        };

        Ok(Self {
            model,
            ciphertext,
            plaintext: ciphertext.to_vec(),
            parent_key: Key::identity(),
            parent_score: f32::INFINITY,
            rng,
            stagnation_limit: DEFAULT_STAGNATION_LIMIT,
            report_interval: DEFAULT_REPORT_INTERVAL,
        })
    }

    pub fn with_stagnation_limit(mut self, limit: u32) -> Self {
        self.stagnation_limit = limit.max(1);
        self
    }

    /// Trials between throughput reports; 0 disables them.
    pub fn with_report_interval(mut self, interval: u64) -> Self {
        self.report_interval = interval;
        self
    }

    pub fn parent_key(&self) -> &Key {
        &self.parent_key
    }

    pub fn parent_score(&self) -> f32 {
        self.parent_score
    }

    /// Decrypts under `key` into the shared buffer and scores the result.
    #[inline(always)]
    pub fn evaluate(&mut self, key: &Key) -> f32 {
        key.decrypt_into(self.ciphertext, &mut self.plaintext);
        self.model.score_letters(&self.plaintext)
    }

    /// Replaces the parent with a fresh random key and returns its score.
    pub fn restart(&mut self) -> f32 {
        let key = mutation::random_key(&mut self.rng);
        self.parent_score = self.evaluate(&key);
        self.parent_key = key;
        self.parent_score
    }

    /// Greedy swaps from the current parent until `stagnation_limit`
    /// consecutive trials fail to improve it.
    pub fn climb<O: SearchObserver + ?Sized>(&mut self, observer: &O) -> ClimbStats {
        let mut stats = ClimbStats::default();
        let mut count = 0;

        while count < self.stagnation_limit {
            let child = mutation::swap_move(&self.parent_key, &mut self.rng);
            let score = self.evaluate(&child);
            stats.trials += 1;

            if score < self.parent_score {
                self.parent_key = child;
                self.parent_score = score;
                count = 0;
                stats.accepted += 1;
                observer.on_accept(score);
            } else {
                count += 1;
            }
        }

        stats
    }

    /// Restart-and-climb until `stop` fires. `stop` is consulted before each
    /// restart, so a run always ends on a restart boundary.
    pub fn run<S, O>(&mut self, mut state: SearchState, stop: &mut S, observer: &O) -> SearchState
    where
        S: StopCondition + ?Sized,
        O: SearchObserver + ?Sized,
    {
        let started = Instant::now();
        let trials_at_start = state.trials;

        while !stop.should_stop(&state, started.elapsed()) {
            state.restarts += 1;
            let initial = self.restart();
            observer.on_restart(state.restarts, initial);

            let climb = self.climb(observer);
            let before = state.trials;
            state.trials += climb.trials;

            if self.report_interval > 0
                && state.trials / self.report_interval > before / self.report_interval
            {
                let elapsed = started.elapsed();
                let run_trials = state.trials - trials_at_start;
                observer.on_throughput(&Throughput {
                    trials: state.trials,
                    elapsed,
                    attempts_per_sec: run_trials as f64 / elapsed.as_secs_f64().max(1e-9),
                });
            }

            if self.parent_score < state.best_score {
                let previous_key = state.best_key;
                let previous_score = state.best_score;

                state.best_key = self.parent_key;
                state.best_score = self.parent_score;
                // The buffer holds the last rejected child; refresh it.
                self.parent_key
                    .decrypt_into(self.ciphertext, &mut self.plaintext);
                state.best_plaintext.clear();
                state.best_plaintext.extend_from_slice(&self.plaintext);

                observer.on_new_best(&NewBest {
                    restart: state.restarts,
                    score: state.best_score,
                    previous_score,
                    previous_key,
                    key: state.best_key,
                    plaintext: state.plaintext(),
                });
            }
        }

        state
    }
}
