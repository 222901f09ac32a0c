// src/bin/snm_search_cli.rs
use clap::{Parser, Subcommand};
use dotenv::dotenv;

use snm_symbol_search::error::SearchError;
use snm_symbol_search::search::DEFAULT_LIMIT;
use snm_symbol_search::symbols::{load_records_from_path, RecordStore};
use snm_symbol_search::types::{ScoredMatch, SearchResponse};

#[derive(Parser)]
#[command(name = "snm-search-cli")]
#[command(about = "Fuzzy NSE symbol search from the command line", long_about = None)]
struct Cli {
    /// Equity list CSV (defaults to SYMBOLS_CSV_PATH or EQUITY_L.csv)
    #[arg(short, long, global = true)]
    data: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank symbols against a query
    Search {
        query: String,
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
        /// Print the same JSON body the HTTP endpoint returns
        #[arg(long)]
        json: bool,
    },
    /// Show what the loader found in the data file
    Inspect,
}

fn data_path(cli_value: Option<String>) -> String {
    cli_value
        .or_else(|| std::env::var("SYMBOLS_CSV_PATH").ok())
        .unwrap_or_else(|| "EQUITY_L.csv".to_string())
}

fn main() {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let path = data_path(cli.data);

    let result = match cli.command {
        Commands::Search { query, limit, json } => run_search(&path, &query, limit, json),
        Commands::Inspect => run_inspect(&path),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_search(path: &str, query: &str, limit: usize, json: bool) -> Result<(), SearchError> {
    let table = load_records_from_path(path)?;
    let store = RecordStore::build(table.records)?;
    let results = store.search(query, limit)?;

    if json {
        let response = SearchResponse::from_matches(query.to_string(), results)
            .ok_or_else(|| SearchError::NoMatches(query.to_string()))?;
        let body = serde_json::to_string_pretty(&response)
            .map_err(|e| SearchError::Internal(e.to_string()))?;
        println!("{}", body);
    } else {
        print_table(query, &results);
    }
    Ok(())
}

fn print_table(query: &str, results: &[ScoredMatch]) {
    println!("🔍 Results for '{}' ({}):", query, results.len());
    let width = results.iter().map(|m| m.symbol.len()).max().unwrap_or(6).max(6);
    println!("{:>3}  {:<width$}  {:>6}  NAME", "#", "SYMBOL", "SCORE", width = width);
    for (i, m) in results.iter().enumerate() {
        println!(
            "{:>3}  {:<width$}  {:>6.2}  {}",
            i + 1,
            m.symbol,
            m.score,
            m.name,
            width = width
        );
    }
}

fn run_inspect(path: &str) -> Result<(), SearchError> {
    let table = load_records_from_path(path)?;
    let rows = table.records.len();
    let store = RecordStore::build(table.records)?;

    println!("📄 {}", path);
    println!("Columns: {}", table.columns.join(", "));
    println!("Name column: {}", table.name_column);
    println!("Rows: {} ({} usable, {} skipped)", rows, store.len(), rows - store.len());
    Ok(())
}
