// src/symbols/store.rs
use log::{info, warn};

use crate::error::SearchError;
use crate::types::RawRecord;

/// A normalized reference row. Lowercase forms are computed once so the
/// ranking loop never case-folds per query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    symbol: String,
    name: String,
    symbol_lower: String,
    name_lower: String,
}

impl Record {
    fn from_raw(raw: &RawRecord) -> Option<Self> {
        let symbol = raw.symbol.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let name = raw.name.as_deref().map(str::trim).filter(|s| !s.is_empty())?;

        Some(Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            symbol_lower: symbol.to_lowercase(),
            name_lower: name.to_lowercase(),
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol_lower(&self) -> &str {
        &self.symbol_lower
    }

    pub fn name_lower(&self) -> &str {
        &self.name_lower
    }
}

/// Immutable record set built once at startup and shared by every search.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn build<I>(raw_records: I) -> Result<Self, SearchError>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let mut seen = 0usize;
        let mut records = Vec::new();

        for (row, raw) in raw_records.into_iter().enumerate() {
            seen += 1;
            match Record::from_raw(&raw) {
                Some(record) => records.push(record),
                None => warn!("Skipping record {} with missing symbol or name: {:?}", row, raw),
            }
        }

        if seen == 0 {
            return Err(SearchError::Configuration(
                "cannot build a record store from an empty record set".to_string(),
            ));
        }

        if records.is_empty() {
            return Err(SearchError::Configuration(format!(
                "none of the {} records has both a symbol and a name",
                seen
            )));
        }

        info!("✅ Record store built with {} records ({} skipped)", records.len(), seen - records.len());
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
