// tests/cli.rs
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::{tempdir, TempDir};

use snm_symbol_search::types::SearchResponse;

const EQUITY_SAMPLE: &str = "\
SYMBOL,NAME OF COMPANY, SERIES
TCS,Tata Consultancy Services Limited,EQ
INFY,Infosys Limited,EQ
BROKEN,,EQ
SBIN,State Bank of India,EQ
";

fn write_sample() -> (TempDir, PathBuf) {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("EQUITY_L.csv");
    fs::write(&path, EQUITY_SAMPLE).expect("sample csv written");
    (dir, path)
}

fn run_cli(data: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_snm_search_cli"))
        .arg("--data")
        .arg(data)
        .args(args)
        .env_remove("SYMBOLS_CSV_PATH")
        .env("RUST_LOG", "off")
        .output()
        .expect("cli runs")
}

#[test]
fn search_json_prints_the_api_body() {
    let (_dir, path) = write_sample();
    let output = run_cli(&path, &["search", "tcs", "--json"]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let body: SearchResponse = serde_json::from_slice(&output.stdout).expect("json body");
    assert_eq!(body.query, "tcs");
    assert_eq!(body.top_result.symbol, "TCS");
    assert_eq!(body.count, 3);
}

#[test]
fn search_table_lists_ranked_rows() {
    let (_dir, path) = write_sample();
    let output = run_cli(&path, &["search", "infosys", "--limit", "2"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Results for 'infosys' (2)"));
    assert!(stdout.contains("INFY"));
}

#[test]
fn inspect_reports_row_counts() {
    let (_dir, path) = write_sample();
    let output = run_cli(&path, &["inspect"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Name column: NAME OF COMPANY"));
    assert!(stdout.contains("Rows: 4 (3 usable, 1 skipped)"));
}

#[test]
fn missing_data_file_exits_with_error() {
    let dir = tempdir().expect("temp dir");
    let output = run_cli(&dir.path().join("absent.csv"), &["search", "tcs"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("❌ Error"));
    assert!(output.stdout.is_empty());
}

#[test]
fn blank_query_exits_with_error() {
    let (_dir, path) = write_sample();
    let output = run_cli(&path, &["search", "   "]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid query"));
}
