use crate::key::Key;
use serde::Serialize;
use std::time::Duration;

/// Emitted when a climb ends below the all-time best score.
#[derive(Debug, Clone, Serialize)]
pub struct NewBest {
    pub restart: u64,
    pub score: f32,
    pub previous_score: f32,
    pub previous_key: Key,
    pub key: Key,
    pub plaintext: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Throughput {
    pub trials: u64,
    pub elapsed: Duration,
    pub attempts_per_sec: f64,
}

/// Receives search events. Every hook defaults to a no-op.
pub trait SearchObserver {
    fn on_restart(&self, _restart: u64, _score: f32) {}

    /// A child key strictly improved on its parent.
    fn on_accept(&self, _score: f32) {}

    fn on_new_best(&self, _event: &NewBest) {}

    fn on_throughput(&self, _report: &Throughput) {}
}

impl SearchObserver for () {}
