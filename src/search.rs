//! Relevance scoring, ranking and incremental search.
//!
//! - [`scorer`] scores one entry against one query term
//! - [`ranking`] filters and orders a whole catalog
//! - [`scheduler`] provides cancellable timers for debouncing
//! - [`controller`] turns live query input into displayed views

pub mod controller;
pub mod ranking;
pub mod scheduler;
pub mod scorer;

pub use controller::{SearchController, SearchView};
pub use ranking::{RankingEngine, ScoredEntry, normalize_query};
pub use scheduler::{Scheduler, TimerId, VirtualScheduler, WallClockScheduler};
pub use scorer::{FieldWeights, RelevanceScorer, ScoreBreakdown};
