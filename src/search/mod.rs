// src/search/mod.rs
pub mod engine;
pub mod ranking;
pub mod similarity;

pub use engine::{search, DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT};
pub use ranking::{score_record, ScoreBreakdown, RANKING_POLICY_VERSION};
