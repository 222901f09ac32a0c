// src/metrics.rs
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;

use crate::error::SearchError;

#[derive(Debug, Default)]
pub struct SearchMetrics {
    searches: AtomicU64,
    successful: AtomicU64,
    rejected_queries: AtomicU64,
    rejected_limits: AtomicU64,
    threshold_misses: AtomicU64,
    failures: AtomicU64,
    results_returned: AtomicU64,
    latency_micros: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub searches: u64,
    pub successful: u64,
    pub rejected_queries: u64,
    pub rejected_limits: u64,
    pub threshold_misses: u64,
    pub failures: u64,
    pub results_returned: u64,
    pub average_latency_ms: f64,
    pub timestamp: String,
}

impl SearchMetrics {
    pub fn record_success(&self, results: usize, elapsed: Duration) {
        self.searches.fetch_add(1, Ordering::Relaxed);
        self.successful.fetch_add(1, Ordering::Relaxed);
        self.results_returned.fetch_add(results as u64, Ordering::Relaxed);
        self.latency_micros
            .fetch_add(elapsed.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn record_error(&self, error: &SearchError) {
        self.searches.fetch_add(1, Ordering::Relaxed);
        let counter = match error {
            SearchError::InvalidQuery(_) => &self.rejected_queries,
            SearchError::InvalidLimit { .. } => &self.rejected_limits,
            SearchError::NoMatches(_) => &self.threshold_misses,
            _ => &self.failures,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let successful = self.successful.load(Ordering::Relaxed);
        let latency_micros = self.latency_micros.load(Ordering::Relaxed);
        let average_latency_ms = if successful > 0 {
            latency_micros as f64 / successful as f64 / 1000.0
        } else {
            0.0
        };

        MetricsSnapshot {
            searches: self.searches.load(Ordering::Relaxed),
            successful,
            rejected_queries: self.rejected_queries.load(Ordering::Relaxed),
            rejected_limits: self.rejected_limits.load(Ordering::Relaxed),
            threshold_misses: self.threshold_misses.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            results_returned: self.results_returned.load(Ordering::Relaxed),
            average_latency_ms,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

lazy_static::lazy_static! {
    pub static ref SEARCH_METRICS: SearchMetrics = SearchMetrics::default();
}
