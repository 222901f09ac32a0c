// src/bin/snm_search_server.rs
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::info;

use snm_symbol_search::config::SearchConfig;
use snm_symbol_search::search::RANKING_POLICY_VERSION;
use snm_symbol_search::server::{configure, cors_handler, cors_headers, AppState};
use snm_symbol_search::symbols::{load_records_from_path, RecordStore};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = SearchConfig::from_env().context("invalid search configuration")?;

    // The store must be complete before the first request is accepted.
    let table = load_records_from_path(&config.data_path)?;
    let store = RecordStore::build(table.records)?;
    let record_count = store.len();

    let bind_address = config.bind_address();
    let allow_origin = config.cors_allow_origin.clone();
    let state = web::Data::new(AppState::new(config, store));

    info!("🚀 Symbol search server running on http://{}", bind_address);
    info!("📋 {} records loaded, ranking policy {}", record_count, RANKING_POLICY_VERSION);
    info!("  • GET /search?q=<text>&limit=<n>  - Fuzzy symbol / company search");
    info!("  • GET /health                     - Health check");
    info!("  • GET /metrics                    - Search counters");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors_headers(&allow_origin))
            .wrap(Logger::default())
            .configure(configure)
            .default_service(web::to(cors_handler))
    })
    .bind(&bind_address)
    .with_context(|| format!("failed to bind {}", bind_address))?
    .run()
    .await?;

    Ok(())
}
