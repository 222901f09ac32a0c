// src/symbols/loader.rs
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info};

use crate::error::SearchError;
use crate::types::RawRecord;

pub const SYMBOL_COLUMN: &str = "SYMBOL";

/// Accepted company-name headers, in order of preference.
pub const NAME_COLUMN_CANDIDATES: [&str; 4] = ["NAME OF COMPANY", "NAME", "COMPANY NAME", "COMPANY"];

#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub records: Vec<RawRecord>,
    pub name_column: String,
    pub columns: Vec<String>,
}

fn normalize_header(header: &str) -> String {
    header.trim_start_matches('\u{feff}').trim().to_uppercase()
}

fn non_blank(cell: Option<&str>) -> Option<String> {
    cell.map(str::trim).filter(|c| !c.is_empty()).map(str::to_string)
}

/// Parse an equity list in CSV form. Needs a `SYMBOL` column and one of the
/// [`NAME_COLUMN_CANDIDATES`].
pub fn load_records<R: Read>(source: R) -> Result<LoadedTable, SearchError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let columns: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
    debug!("Detected columns: {:?}", columns);

    let symbol_idx = columns
        .iter()
        .position(|c| c == SYMBOL_COLUMN)
        .ok_or_else(|| {
            SearchError::Configuration(format!("missing {} column (found {:?})", SYMBOL_COLUMN, columns))
        })?;

    let (name_idx, name_column) = NAME_COLUMN_CANDIDATES
        .iter()
        .find_map(|candidate| {
            columns
                .iter()
                .position(|c| c == candidate)
                .map(|idx| (idx, candidate.to_string()))
        })
        .ok_or_else(|| {
            SearchError::Configuration(format!(
                "missing company name column, expected one of {:?} (found {:?})",
                NAME_COLUMN_CANDIDATES, columns
            ))
        })?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(RawRecord {
            symbol: non_blank(row.get(symbol_idx)),
            name: non_blank(row.get(name_idx)),
        });
    }

    Ok(LoadedTable {
        records,
        name_column,
        columns,
    })
}

pub fn load_records_from_path(path: impl AsRef<Path>) -> Result<LoadedTable, SearchError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        SearchError::Configuration(format!("error loading {}: {}", path.display(), e))
    })?;

    let table = load_records(file).map_err(|e| match e {
        SearchError::Configuration(msg) => {
            SearchError::Configuration(format!("{}: {}", path.display(), msg))
        }
        other => SearchError::Configuration(format!("error loading {}: {}", path.display(), other)),
    })?;

    info!(
        "📄 Loaded {} rows from {} (name column: {})",
        table.records.len(),
        path.display(),
        table.name_column
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NSE_SAMPLE: &str = "\
SYMBOL,NAME OF COMPANY, SERIES, DATE OF LISTING
TCS,Tata Consultancy Services Limited,EQ,25-AUG-2004
INFY,Infosys Limited,EQ,08-FEB-1995
";

    #[test]
    fn loads_nse_equity_list() {
        let table = load_records(NSE_SAMPLE.as_bytes()).unwrap();

        assert_eq!(table.name_column, "NAME OF COMPANY");
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.records[0], RawRecord::new("TCS", "Tata Consultancy Services Limited"));
        assert_eq!(table.columns[2], "SERIES");
    }

    #[test]
    fn headers_are_trimmed_and_uppercased() {
        let csv = " symbol , Company Name \nHDFCBANK,HDFC Bank Limited\n";
        let table = load_records(csv.as_bytes()).unwrap();

        assert_eq!(table.name_column, "COMPANY NAME");
        assert_eq!(table.records[0], RawRecord::new("HDFCBANK", "HDFC Bank Limited"));
    }

    #[test]
    fn prefers_earlier_name_candidates() {
        let csv = "SYMBOL,COMPANY,NAME\nSBIN,State Bank,State Bank of India\n";
        let table = load_records(csv.as_bytes()).unwrap();

        assert_eq!(table.name_column, "NAME");
        assert_eq!(table.records[0].name.as_deref(), Some("State Bank of India"));
    }

    #[test]
    fn missing_symbol_column_is_rejected() {
        let csv = "TICKER,NAME\nTCS,Tata\n";
        let err = load_records(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, SearchError::Configuration(_)));
    }

    #[test]
    fn missing_name_column_is_rejected() {
        let csv = "SYMBOL,SERIES\nTCS,EQ\n";
        let err = load_records(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, SearchError::Configuration(_)));
    }

    #[test]
    fn blank_and_short_rows_become_none() {
        let csv = "SYMBOL,NAME\nLT,\nMARUTI\n";
        let table = load_records(csv.as_bytes()).unwrap();

        assert_eq!(table.records[0], RawRecord { symbol: Some("LT".into()), name: None });
        assert_eq!(table.records[1], RawRecord { symbol: Some("MARUTI".into()), name: None });
    }

    #[test]
    fn missing_file_is_a_configuration_error() {
        let err = load_records_from_path("/definitely/not/here/EQUITY_L.csv").unwrap_err();
        assert!(matches!(err, SearchError::Configuration(_)));
    }
}
