// src/types.rs
use serde::{Deserialize, Serialize};

/// One row as handed over by the data loader, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub symbol: Option<String>,
    pub name: Option<String>,
}

impl RawRecord {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            name: Some(name.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMatch {
    #[serde(rename = "SYMBOL")]
    pub symbol: String,
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "MATCH_SCORE")]
    pub score: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub top_result: ScoredMatch,
    pub results: Vec<ScoredMatch>,
}

impl SearchResponse {
    /// Returns `None` when there is nothing to put in `top_result`.
    pub fn from_matches(query: String, results: Vec<ScoredMatch>) -> Option<Self> {
        let top_result = results.first()?.clone();
        Some(Self {
            query,
            count: results.len(),
            top_result,
            results,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub detail: String,
}
