// src/search/ranking.rs
//! Symbol-weighted fuzzy scoring and the result ordering.

use std::cmp::Ordering;

use super::similarity::{partial_ratio, token_set_ratio};
use crate::symbols::Record;

/// Bumped whenever weights, boosts or tie-breaks change behavior.
pub const RANKING_POLICY_VERSION: &str = "symbol-weighted-v1";

pub const SYMBOL_TOKEN_WEIGHT: f64 = 1.4;
pub const SYMBOL_PARTIAL_WEIGHT: f64 = 1.2;
pub const NAME_TOKEN_WEIGHT: f64 = 0.6;
pub const NAME_PARTIAL_WEIGHT: f64 = 0.5;
pub const WEIGHT_TOTAL: f64 =
    SYMBOL_TOKEN_WEIGHT + SYMBOL_PARTIAL_WEIGHT + NAME_TOKEN_WEIGHT + NAME_PARTIAL_WEIGHT;

pub const EXACT_SYMBOL_BOOST: f64 = 25.0;
pub const SYMBOL_PREFIX_BOOST: f64 = 15.0;
pub const NAME_PREFIX_BOOST: f64 = 8.0;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Every component that went into a record's score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub symbol_token: f64,
    pub symbol_partial: f64,
    pub name_token: f64,
    pub name_partial: f64,
    /// Weighted blend before boosts.
    pub base: f64,
    pub boost: f64,
    /// `base + boost` clamped to [0, 100], unrounded.
    pub total: f64,
    pub symbol_prefix: bool,
}

/// Score one record against an already trimmed and lowercased query.
pub fn score_record(query: &str, record: &Record) -> ScoreBreakdown {
    let symbol = record.symbol_lower();
    let name = record.name_lower();

    let symbol_token = token_set_ratio(query, symbol);
    let symbol_partial = partial_ratio(query, symbol);
    let name_token = token_set_ratio(query, name);
    let name_partial = partial_ratio(query, name);

    let base = (symbol_token * SYMBOL_TOKEN_WEIGHT
        + symbol_partial * SYMBOL_PARTIAL_WEIGHT
        + name_token * NAME_TOKEN_WEIGHT
        + name_partial * NAME_PARTIAL_WEIGHT)
        / WEIGHT_TOTAL;

    let symbol_prefix = symbol.starts_with(query);
    let mut boost = 0.0;
    if symbol == query {
        boost += EXACT_SYMBOL_BOOST;
    } else if symbol_prefix {
        boost += SYMBOL_PREFIX_BOOST;
    }
    if name.starts_with(query) {
        boost += NAME_PREFIX_BOOST;
    }

    ScoreBreakdown {
        symbol_token,
        symbol_partial,
        name_token,
        name_partial,
        base,
        boost,
        total: (base + boost).clamp(MIN_SCORE, MAX_SCORE),
        symbol_prefix,
    }
}

/// Round for presentation only; ordering always uses the unrounded total.
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// A record paired with its unrounded score, ready for ordering.
#[derive(Debug, Clone)]
pub struct RankedRecord<'a> {
    pub record: &'a Record,
    pub score: f64,
    pub symbol_prefix: bool,
}

impl<'a> RankedRecord<'a> {
    pub fn new(record: &'a Record, breakdown: &ScoreBreakdown) -> Self {
        Self {
            record,
            score: breakdown.total,
            symbol_prefix: breakdown.symbol_prefix,
        }
    }
}

/// Best-first order: score, symbol-prefix flag, symbol length, then symbol
/// text. Every key is descending.
pub fn compare_ranked(a: &RankedRecord<'_>, b: &RankedRecord<'_>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.symbol_prefix.cmp(&a.symbol_prefix))
        .then_with(|| {
            b.record
                .symbol()
                .chars()
                .count()
                .cmp(&a.record.symbol().chars().count())
        })
        .then_with(|| b.record.symbol().cmp(a.record.symbol()))
}
