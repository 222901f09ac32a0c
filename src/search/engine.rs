// src/search/engine.rs
use log::debug;
use rayon::prelude::*;

use super::ranking::{compare_ranked, round_score, score_record, RankedRecord};
use crate::error::SearchError;
use crate::symbols::RecordStore;
use crate::types::ScoredMatch;

pub const MIN_LIMIT: usize = 1;
pub const MAX_LIMIT: usize = 100;
pub const DEFAULT_LIMIT: usize = 15;

/// Trim and lowercase a raw query, rejecting blanks.
pub fn normalize_query(query: &str) -> Result<String, SearchError> {
    let normalized = query.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(SearchError::InvalidQuery(
            "query must be non-empty".to_string(),
        ));
    }
    Ok(normalized)
}

/// Check a caller-supplied limit against `MIN_LIMIT..=max`, where `max` never
/// exceeds [`MAX_LIMIT`].
pub fn validate_limit(limit: i64, max: usize) -> Result<usize, SearchError> {
    let max = max.clamp(MIN_LIMIT, MAX_LIMIT);
    let invalid = || SearchError::InvalidLimit {
        limit,
        min: MIN_LIMIT,
        max,
    };

    let limit_usize = usize::try_from(limit).map_err(|_| invalid())?;
    if !(MIN_LIMIT..=max).contains(&limit_usize) {
        return Err(invalid());
    }
    Ok(limit_usize)
}

/// Rank every record in `store` against `query` and return the best `limit`.
///
/// Inputs are validated before any record is scored. Scoring runs on the rayon
/// pool; the collected order matches the store so the stable sort resolves
/// exact ties by input position.
pub fn search(store: &RecordStore, query: &str, limit: usize) -> Result<Vec<ScoredMatch>, SearchError> {
    let query = normalize_query(query)?;
    let limit = validate_limit(i64::try_from(limit).unwrap_or(i64::MAX), MAX_LIMIT)?;

    let mut ranked: Vec<RankedRecord<'_>> = store
        .records()
        .par_iter()
        .map(|record| RankedRecord::new(record, &score_record(&query, record)))
        .collect();

    ranked.sort_by(compare_ranked);
    ranked.truncate(limit);

    debug!(
        "Ranked {} records for '{}', returning {}",
        store.len(),
        query,
        ranked.len()
    );

    Ok(ranked
        .into_iter()
        .map(|r| ScoredMatch {
            symbol: r.record.symbol().to_string(),
            name: r.record.name().to_string(),
            score: round_score(r.score),
        })
        .collect())
}

impl RecordStore {
    pub fn search(&self, query: &str, limit: usize) -> Result<Vec<ScoredMatch>, SearchError> {
        search(self, query, limit)
    }
}
