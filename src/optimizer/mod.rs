pub mod budget;
pub mod mutation;
pub mod observer;
pub mod runner;
pub mod search;

pub use self::budget::{Budget, StopCondition, StopReason};
pub use self::observer::{NewBest, SearchObserver, Throughput};
pub use self::runner::{Optimizer, SearchOptions, SearchOutcome};
pub use self::search::{ClimbStats, KeySearch, SearchState};
