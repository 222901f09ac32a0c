// src/server.rs
use std::sync::Arc;
use std::time::Instant;

use actix_web::http::Method;
use actix_web::error::InternalError;
use actix_web::{middleware, web, HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use log::{error, info, warn};
use serde::Deserialize;
use uuid::Uuid;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::metrics::SEARCH_METRICS;
use crate::search::engine::{normalize_query, validate_limit};
use crate::search::ranking::RANKING_POLICY_VERSION;
use crate::symbols::RecordStore;
use crate::types::{ErrorResponse, ScoredMatch, SearchResponse};

#[derive(Debug)]
pub struct AppState {
    pub config: SearchConfig,
    pub store: Arc<RecordStore>,
    pub session_id: Uuid,
    pub start_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: SearchConfig, store: RecordStore) -> Self {
        Self {
            config,
            store: Arc::new(store),
            session_id: Uuid::new_v4(),
            start_time: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<i64>,
}

pub fn error_response(err: &SearchError) -> HttpResponse {
    let status = err.status_code();
    if err.is_caller_error() {
        warn!("Search rejected: {}", err);
    } else if status.is_server_error() {
        error!("Search failed: {}", err);
    } else {
        info!("🔍 {}", err);
    }

    HttpResponse::build(status).json(ErrorResponse {
        success: false,
        error: err.error_code().to_string(),
        detail: err.to_string(),
    })
}

/// Malformed query strings (e.g. `limit=abc`) get the same JSON error shape
/// as the rest of the API.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorResponse {
            success: false,
            error: "invalid_parameters".to_string(),
            detail: err.to_string(),
        });
        InternalError::from_response(err, response).into()
    })
}

pub fn cors_headers(allow_origin: &str) -> middleware::DefaultHeaders {
    middleware::DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", allow_origin.to_string()))
        .add(("Access-Control-Allow-Methods", "GET, OPTIONS"))
        .add(("Access-Control-Allow-Headers", "Content-Type, Authorization"))
}

fn apply_threshold(results: Vec<ScoredMatch>, min_match_score: Option<f64>) -> Vec<ScoredMatch> {
    match min_match_score {
        Some(threshold) => results.into_iter().filter(|m| m.score >= threshold).collect(),
        None => results,
    }
}

async fn run_search(params: SearchParams, state: &AppState) -> Result<SearchResponse, SearchError> {
    let raw_query = params.q.unwrap_or_default();

    // Reject bad input before handing anything to the worker pool.
    normalize_query(&raw_query)?;
    let requested = params.limit.unwrap_or(state.config.default_limit as i64);
    let limit = validate_limit(requested, state.config.max_limit)?;

    let store = Arc::clone(&state.store);
    let query = raw_query.clone();
    let results = web::block(move || store.search(&query, limit))
        .await
        .map_err(|e| SearchError::Internal(format!("search worker failed: {}", e)))??;

    let results = apply_threshold(results, state.config.min_match_score);
    SearchResponse::from_matches(raw_query.clone(), results).ok_or(SearchError::NoMatches(raw_query))
}

/// GET /search?q=<text>&limit=<n>
pub async fn search_symbols(params: web::Query<SearchParams>, state: web::Data<AppState>) -> HttpResponse {
    let started = Instant::now();

    match run_search(params.into_inner(), &state).await {
        Ok(response) => {
            let elapsed = started.elapsed();
            info!(
                "🔍 Search '{}' returned {} results in {:?}",
                response.query, response.count, elapsed
            );
            SEARCH_METRICS.record_success(response.count, elapsed);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            SEARCH_METRICS.record_error(&e);
            error_response(&e)
        }
    }
}

pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "snm-symbol-search",
        "version": env!("CARGO_PKG_VERSION"),
        "session_id": state.session_id,
        "uptime_seconds": (Utc::now() - state.start_time).num_seconds(),
        "records": state.store.len(),
        "ranking_policy": RANKING_POLICY_VERSION,
    }))
}

pub async fn metrics_overview() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "snm-symbol-search",
        "metrics": SEARCH_METRICS.snapshot(),
    }))
}

/// Answers CORS preflight; any other request that lands here has no route.
pub async fn cors_handler(req: HttpRequest) -> HttpResponse {
    if req.method() == Method::OPTIONS {
        return HttpResponse::Ok().finish();
    }

    HttpResponse::NotFound().json(ErrorResponse {
        success: false,
        error: "not_found".to_string(),
        detail: format!("No route for {} {}", req.method(), req.path()),
    })
}

/// Registers the API routes. Each resource also answers `OPTIONS` so browser
/// preflights on known paths succeed.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config())
        .service(
            web::resource("/search")
                .route(web::get().to(search_symbols))
                .route(web::method(Method::OPTIONS).to(cors_handler)),
        )
        .service(
            web::resource("/health")
                .route(web::get().to(health_check))
                .route(web::method(Method::OPTIONS).to(cors_handler)),
        )
        .service(
            web::resource("/metrics")
                .route(web::get().to(metrics_overview))
                .route(web::method(Method::OPTIONS).to(cors_handler)),
        );
}
