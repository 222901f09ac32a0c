// src/lib.rs
pub mod config;
pub mod error;
pub mod metrics;
pub mod search;
pub mod server;
pub mod symbols;
pub mod types;

pub use config::SearchConfig;
pub use error::SearchError;
pub use search::search;
pub use server::{configure, cors_handler, cors_headers, health_check, search_symbols, AppState};
pub use symbols::{Record, RecordStore};
pub use types::{RawRecord, ScoredMatch, SearchResponse};
