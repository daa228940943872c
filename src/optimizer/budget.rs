use crate::optimizer::search::SearchState;
use crate::text::normalize;
use serde::Serialize;
use std::time::Duration;
use strum_macros::{Display, EnumString};

/// Decides, at each restart boundary, whether the search should end.
pub trait StopCondition {
    fn should_stop(&mut self, state: &SearchState, elapsed: Duration) -> bool;
}

impl<F> StopCondition for F
where
    F: FnMut(&SearchState, Duration) -> bool,
{
    fn should_stop(&mut self, state: &SearchState, elapsed: Duration) -> bool {
        self(state, elapsed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    RestartLimit,
    TimeLimit,
    TargetScore,
    CribFound,
    Predicate,
}

/// Stop conditions combined with OR. An empty budget never stops.
#[derive(Debug, Clone, Default)]
pub struct Budget {
    pub max_restarts: Option<u64>,
    pub max_time: Option<Duration>,
    pub target_score: Option<f32>,
    crib: Option<Vec<u8>>,
    triggered: Option<StopReason>,
}

impl Budget {
    /// Budget from optional limits; `None` leaves that condition off.
    pub fn new(
        max_restarts: Option<u64>,
        max_time: Option<Duration>,
        target_score: Option<f32>,
    ) -> Self {
        Self {
            max_restarts,
            max_time,
            target_score,
            crib: None,
            triggered: None,
        }
    }

    pub fn restarts(max_restarts: u64) -> Self {
        Self {
            max_restarts: Some(max_restarts),
            ..Default::default()
        }
    }

    pub fn with_max_time(mut self, max_time: Duration) -> Self {
        self.max_time = Some(max_time);
        self
    }

    pub fn with_target_score(mut self, target: f32) -> Self {
        self.target_score = Some(target);
        self
    }

    /// Known plaintext fragment; normalized like the ciphertext.
    /// A fragment with no letters is ignored.
    pub fn with_crib(mut self, crib: &str) -> Self {
        let letters = normalize(crib);
        self.crib = if letters.is_empty() { None } else { Some(letters) };
        self
    }

    pub fn crib(&self) -> Option<&[u8]> {
        self.crib.as_deref()
    }

    pub fn is_bounded(&self) -> bool {
        self.max_restarts.is_some()
            || self.max_time.is_some()
            || self.target_score.is_some()
            || self.crib.is_some()
    }

    /// The condition that ended the last `run`, if any.
    pub fn triggered(&self) -> Option<StopReason> {
        self.triggered
    }

    pub fn check(&self, state: &SearchState, elapsed: Duration) -> Option<StopReason> {
        if let Some(max) = self.max_restarts {
            if state.restarts >= max {
                return Some(StopReason::RestartLimit);
            }
        }
        if let Some(target) = self.target_score {
            if state.best_score <= target {
                return Some(StopReason::TargetScore);
            }
        }
        if let Some(crib) = &self.crib {
            if state
                .best_plaintext
                .windows(crib.len())
                .any(|w| w == crib.as_slice())
            {
                return Some(StopReason::CribFound);
            }
        }
        if let Some(limit) = self.max_time {
            if elapsed >= limit {
                return Some(StopReason::TimeLimit);
            }
        }
        None
    }
}

impl StopCondition for Budget {
    fn should_stop(&mut self, state: &SearchState, elapsed: Duration) -> bool {
        self.triggered = self.check(state, elapsed);
        self.triggered.is_some()
    }
}
