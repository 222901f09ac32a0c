// src/error.rs
use actix_web::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid limit {limit}: must be between {min} and {max}")]
    InvalidLimit { limit: i64, min: usize, max: usize },

    #[error("No matches found for query: {0}")]
    NoMatches(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SearchError {
    /// Stable machine-readable code used in HTTP error bodies.
    pub fn error_code(&self) -> &'static str {
        match self {
            SearchError::Configuration(_) => "configuration_error",
            SearchError::InvalidQuery(_) => "invalid_query",
            SearchError::InvalidLimit { .. } => "invalid_limit",
            SearchError::NoMatches(_) => "no_matches",
            SearchError::Csv(_) => "configuration_error",
            SearchError::Internal(_) => "internal_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchError::InvalidQuery(_) | SearchError::InvalidLimit { .. } => StatusCode::BAD_REQUEST,
            SearchError::NoMatches(_) => StatusCode::NOT_FOUND,
            SearchError::Configuration(_) | SearchError::Csv(_) | SearchError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Caller mistakes that are reported without touching the ranking loop.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, SearchError::InvalidQuery(_) | SearchError::InvalidLimit { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_errors_map_to_bad_request() {
        let query = SearchError::InvalidQuery("empty".into());
        let limit = SearchError::InvalidLimit { limit: 0, min: 1, max: 100 };

        assert_eq!(query.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(limit.status_code(), StatusCode::BAD_REQUEST);
        assert!(query.is_caller_error());
        assert!(limit.is_caller_error());
    }

    #[test]
    fn configuration_errors_are_server_errors() {
        let err = SearchError::Configuration("no records".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "configuration_error");
        assert!(!err.is_caller_error());
    }

    #[test]
    fn invalid_limit_message_names_bounds() {
        let err = SearchError::InvalidLimit { limit: 250, min: 1, max: 100 };
        assert_eq!(err.to_string(), "Invalid limit 250: must be between 1 and 100");
    }
}
