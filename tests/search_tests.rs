mod common;

use cipherforge::config::FitnessParams;
use cipherforge::key::Key;
use cipherforge::optimizer::{
    Budget, KeySearch, NewBest, Optimizer, SearchObserver, SearchOptions, SearchState, StopReason,
};
use cipherforge::scorer::FitnessModel;
use cipherforge::text::normalize;
use std::cell::RefCell;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Event {
    Restart(f32),
    Accept(f32),
}

#[derive(Default)]
struct Recorder {
    events: RefCell<Vec<Event>>,
    bests: RefCell<Vec<NewBest>>,
}

impl SearchObserver for Recorder {
    fn on_restart(&self, _restart: u64, score: f32) {
        self.events.borrow_mut().push(Event::Restart(score));
    }

    fn on_accept(&self, score: f32) {
        self.events.borrow_mut().push(Event::Accept(score));
    }

    fn on_new_best(&self, event: &NewBest) {
        self.bests.borrow_mut().push(event.clone());
    }
}

fn options(seed: u64, budget: Budget) -> SearchOptions {
    SearchOptions {
        stagnation_limit: 1000,
        report_interval: 0,
        seed: Some(seed),
        budget,
    }
}

fn held_out_ciphertext() -> (Vec<u8>, Vec<u8>) {
    let plain = normalize(common::HELD_OUT);
    let cipher = Key::caesar(3).encrypt(&plain);
    (plain, cipher)
}

#[test]
fn test_same_seed_same_outcome() {
    let model = Arc::new(common::english_model());
    let (_, cipher) = held_out_ciphertext();

    let a = Optimizer::new(model.clone(), options(42, Budget::restarts(5)))
        .run(&cipher, &())
        .unwrap();
    let b = Optimizer::new(model, options(42, Budget::restarts(5)))
        .run(&cipher, &())
        .unwrap();

    assert_eq!(a.key, b.key);
    assert_eq!(a.score, b.score);
    assert_eq!(a.trials, b.trials);
    assert_eq!(a.plaintext, b.plaintext);
    assert_eq!(a.seed, 42);
}

#[test]
fn test_unseeded_run_reports_replayable_seed() {
    let model = Arc::new(common::english_model());
    let (_, cipher) = held_out_ciphertext();

    let mut opts = options(0, Budget::restarts(2));
    opts.seed = None;
    let first = Optimizer::new(model.clone(), opts).run(&cipher, &()).unwrap();

    let replay = Optimizer::new(model, options(first.seed, Budget::restarts(2)))
        .run(&cipher, &())
        .unwrap();
    assert_eq!(first.key, replay.key);
    assert_eq!(first.trials, replay.trials);
}

#[test]
fn test_accepted_scores_strictly_decrease_within_a_climb() {
    let model = common::english_model();
    let (_, cipher) = held_out_ciphertext();
    let recorder = Recorder::default();

    let mut search = KeySearch::new(&model, &cipher, Some(7))
        .unwrap()
        .with_stagnation_limit(300);
    let mut budget = Budget::restarts(6);
    let state = search.run(SearchState::new(), &mut budget, &recorder);

    let events = recorder.events.borrow();
    let restarts = events
        .iter()
        .filter(|e| matches!(e, Event::Restart(_)))
        .count();
    assert_eq!(restarts as u64, state.restarts);

    let mut current = f32::INFINITY;
    for event in events.iter() {
        match *event {
            Event::Restart(score) => current = score,
            Event::Accept(score) => {
                assert!(score < current, "accepted {} after {}", score, current);
                current = score;
            }
        }
    }
}

#[test]
fn test_new_best_events_improve_and_match_state() {
    let model = common::english_model();
    let (_, cipher) = held_out_ciphertext();
    let recorder = Recorder::default();

    let mut search = KeySearch::new(&model, &cipher, Some(3))
        .unwrap()
        .with_stagnation_limit(300);
    let state = search.run(SearchState::new(), &mut Budget::restarts(8), &recorder);

    let bests = recorder.bests.borrow();
    assert!(!bests.is_empty());
    assert!(bests[0].previous_score.is_infinite());
    for pair in bests.windows(2) {
        assert!(pair[1].score < pair[0].score);
        assert_eq!(pair[1].previous_key, pair[0].key);
    }

    let last = bests.last().unwrap();
    assert_eq!(last.key, state.best_key);
    assert_eq!(last.score, state.best_score);
    assert_eq!(last.plaintext, state.plaintext());
    assert_eq!(state.best_plaintext, state.best_key.decrypt(&cipher));
    assert!((model.score(&state.best_plaintext).unwrap() - state.best_score).abs() < 1e-6);
}

#[test]
fn test_search_resumes_from_returned_state() {
    let model = common::english_model();
    let (_, cipher) = held_out_ciphertext();

    let mut search = KeySearch::new(&model, &cipher, Some(11))
        .unwrap()
        .with_stagnation_limit(200);
    let state = search.run(SearchState::new(), &mut Budget::restarts(3), &());
    let first_best = state.best_score;
    let first_trials = state.trials;

    let state = search.run(state, &mut Budget::restarts(6), &());
    assert_eq!(state.restarts, 6);
    assert!(state.best_score <= first_best);
    assert!(state.trials > first_trials);
}

#[test]
fn test_target_score_stops_early() {
    let model = Arc::new(common::english_model());
    let (_, cipher) = held_out_ciphertext();

    // Any finite best meets this target, so the first restart is the last.
    let budget = Budget::restarts(1000).with_target_score(f32::MAX);
    let outcome = Optimizer::new(model, options(5, budget))
        .run(&cipher, &())
        .unwrap();
    assert_eq!(outcome.restarts, 1);
    assert_eq!(outcome.stop_reason, StopReason::TargetScore);
}

#[test]
fn test_time_limit_stops() {
    let model = Arc::new(common::english_model());
    let (_, cipher) = held_out_ciphertext();

    let budget = Budget::default().with_max_time(Duration::from_millis(50));
    let outcome = Optimizer::new(model, options(5, budget))
        .run(&cipher, &())
        .unwrap();
    assert_eq!(outcome.stop_reason, StopReason::TimeLimit);
    assert!(outcome.restarts >= 1);
}

#[test]
fn test_zero_restart_budget_returns_identity() {
    let model = Arc::new(common::english_model());
    let (_, cipher) = held_out_ciphertext();

    let outcome = Optimizer::new(model, options(1, Budget::restarts(0)))
        .run(&cipher, &())
        .unwrap();
    assert_eq!(outcome.restarts, 0);
    assert_eq!(outcome.trials, 0);
    assert_eq!(outcome.key, Key::identity());
    assert_eq!(outcome.stop_reason, StopReason::RestartLimit);
}

#[test]
fn test_tion_corpus_prefers_true_key() {
    let params = FitnessParams {
        reference_top_k: 1,
        ..Default::default()
    };
    let model = FitnessModel::from_reader("TION 1000\nQXZJ 1\n".as_bytes(), &params).unwrap();
    let plain = normalize(
        "the nation paid attention to the station and the motion of every portion of the action",
    );
    let key = Key::caesar(3);
    let cipher = key.encrypt(&plain);

    let true_score = model.score(&key.decrypt(&cipher)).unwrap();
    let identity_score = model.score(&Key::identity().decrypt(&cipher)).unwrap();
    assert!(true_score < identity_score);

    let mut search = KeySearch::new(&model, &cipher, Some(2))
        .unwrap()
        .with_stagnation_limit(200);
    let mut budget = Budget::restarts(5000).with_target_score(identity_score - 1e-3);
    let state = search.run(SearchState::new(), &mut budget, &());

    assert!(state.best_score < identity_score);
    assert_eq!(budget.triggered(), Some(StopReason::TargetScore));
    assert_eq!(state.best_plaintext, state.best_key.decrypt(&cipher));
}

#[test]
fn test_recovers_caesar_plaintext_with_crib() {
    let model = Arc::new(common::english_model());
    let (plain, cipher) = held_out_ciphertext();
    let identity_score = model.score(&cipher).unwrap();

    let budget = Budget::restarts(400).with_crib("the fields and");
    let outcome = Optimizer::new(model, options(2024, budget))
        .run(&cipher, &())
        .unwrap();

    assert_eq!(outcome.stop_reason, StopReason::CribFound);
    assert!(outcome.score < identity_score);
    assert!(outcome.plaintext.contains("THE"));
    assert!(outcome.plaintext.contains("AND"));
    assert!(outcome.plaintext.contains("THEFIELDSAND"));
    assert_eq!(outcome.plaintext.len(), plain.len());
}

#[test]
fn test_plain_restart_budget_improves_on_ciphertext() {
    let model = Arc::new(common::english_model());
    let (_, cipher) = held_out_ciphertext();
    let identity_score = model.score(&cipher).unwrap();

    let outcome = Optimizer::new(model, options(99, Budget::restarts(50)))
        .run(&cipher, &())
        .unwrap();

    assert_eq!(outcome.stop_reason, StopReason::RestartLimit);
    assert_eq!(outcome.restarts, 50);
    assert!(outcome.score < identity_score);
    assert!(outcome.plaintext.contains("THE"));
}
