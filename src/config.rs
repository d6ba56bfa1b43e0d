//! Provider configuration
//!
//! Credentials and query parameters are carried in an explicit `Config` object
//! handed to the record-source constructor. Environment lookups happen only in
//! `Config::from_env`, at the composition boundary.

use crate::error::{AppError, Result};
use chrono::NaiveDate;

const DEFAULT_SYMBOL: &str = "FSE/AFX_X";
const DEFAULT_START_DATE: &str = "2017-01-01";
const DEFAULT_END_DATE: &str = "2017-12-31";

/// Configuration for one record-source run
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider API key
    pub api_key: String,
    /// Dataset code, e.g. "FSE/AFX_X"
    pub symbol: String,
    /// Inclusive start of the date range
    pub start_date: NaiveDate,
    /// Inclusive end of the date range
    pub end_date: NaiveDate,
}

impl Config {
    /// Create a validated config
    pub fn new(
        api_key: impl Into<String>,
        symbol: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self> {
        let api_key = api_key.into();
        let symbol = symbol.into();

        if api_key.is_empty() {
            return Err(AppError::Config("API key must not be empty".to_string()));
        }
        if symbol.is_empty() {
            return Err(AppError::Config("Symbol must not be empty".to_string()));
        }
        if start_date > end_date {
            return Err(AppError::Config(format!(
                "Start date {} is after end date {}",
                start_date, end_date
            )));
        }

        Ok(Self {
            api_key,
            symbol,
            start_date,
            end_date,
        })
    }

    /// Build a config from environment variables
    ///
    /// `QUANDL_API_KEY` is required. `QUANDL_SYMBOL`, `START_DATE` and `END_DATE`
    /// fall back to FSE/AFX_X over calendar year 2017.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("QUANDL_API_KEY")
            .map_err(|_| AppError::Config("QUANDL_API_KEY is not set".to_string()))?;

        let symbol =
            std::env::var("QUANDL_SYMBOL").unwrap_or_else(|_| DEFAULT_SYMBOL.to_string());

        let start_date = parse_date(
            &std::env::var("START_DATE").unwrap_or_else(|_| DEFAULT_START_DATE.to_string()),
        )?;
        let end_date = parse_date(
            &std::env::var("END_DATE").unwrap_or_else(|_| DEFAULT_END_DATE.to_string()),
        )?;

        Self::new(api_key, symbol, start_date, end_date)
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| AppError::Config(format!("Invalid date '{}': {}", value, e)))
}
