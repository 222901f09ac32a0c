// src/config.rs
use std::env;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

use crate::search::engine::{DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT};

#[derive(Clone, Debug)]
pub struct SearchConfig {
    pub host: String,
    pub port: u16,
    pub data_path: String,
    pub default_limit: usize,
    pub max_limit: usize,
    /// Results scoring below this are hidden by the API layer. `None` returns
    /// the full top-K.
    pub min_match_score: Option<f64>,
    pub cors_allow_origin: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            data_path: "EQUITY_L.csv".to_string(),
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
            min_match_score: None,
            cors_allow_origin: "*".to_string(),
        }
    }
}

fn parse_var<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("invalid value for {}: {:?}", key, raw)),
        _ => Ok(None),
    }
}

impl SearchConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT")?.unwrap_or(defaults.port),
            data_path: env::var("SYMBOLS_CSV_PATH").unwrap_or(defaults.data_path),
            default_limit: parse_var("DEFAULT_SEARCH_LIMIT")?.unwrap_or(defaults.default_limit),
            max_limit: parse_var::<usize>("MAX_SEARCH_LIMIT")?
                .unwrap_or(defaults.max_limit)
                .clamp(MIN_LIMIT, MAX_LIMIT),
            min_match_score: parse_var("MIN_MATCH_SCORE")?,
            cors_allow_origin: env::var("CORS_ALLOW_ORIGIN").unwrap_or(defaults.cors_allow_origin),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_LIMIT..=self.max_limit).contains(&self.default_limit) {
            return Err(anyhow!(
                "DEFAULT_SEARCH_LIMIT {} must be between {} and {}",
                self.default_limit,
                MIN_LIMIT,
                self.max_limit
            ));
        }
        if let Some(threshold) = self.min_match_score {
            if !(0.0..=100.0).contains(&threshold) {
                return Err(anyhow!("MIN_MATCH_SCORE {} must be between 0 and 100", threshold));
            }
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
