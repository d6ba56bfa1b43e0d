//! Quandl dataset adapter
//!
//! Fetches daily time-series data from the Quandl v3 dataset API, e.g.
//! `FSE/AFX_X` for the Frankfurt Stock Exchange. The response carries column
//! names and row-oriented data separately; `parse_dataset` maps the columns the
//! engine cares about by name and tolerates any extra columns the exchange
//! appends.

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::providers::types::DailyRecord;
use crate::providers::RecordSource;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

const BASE_URL: &str = "https://www.quandl.com/api/v3/datasets";

const COL_DATE: &str = "Date";
const COL_OPEN: &str = "Open";
const COL_HIGH: &str = "High";
const COL_LOW: &str = "Low";
const COL_CLOSE: &str = "Close";
const COL_VOLUME: &str = "Traded Volume";

/// Response envelope for a dataset request
#[derive(Debug, Deserialize)]
struct DatasetEnvelope {
    dataset: Dataset,
}

/// The row-oriented dataset payload
#[derive(Debug, Deserialize)]
pub struct Dataset {
    column_names: Vec<String>,
    data: Vec<Vec<Value>>,
}

/// Quandl record source
pub struct QuandlClient {
    client: Client,
    base_url: Url,
    config: Config,
}

impl QuandlClient {
    pub fn new(config: Config) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: Url::parse(BASE_URL).expect("Base URL is valid"),
            config,
        }
    }

    /// Point the client at a non-default endpoint (test servers, mirrors)
    pub fn with_base_url(config: Config, base_url: Url) -> Self {
        let mut client = Self::new(config);
        client.base_url = base_url;
        client
    }

    fn dataset_url(&self) -> Url {
        // The symbol is "DATABASE/CODE", both segments part of the path
        let path = format!(
            "{}/{}.json",
            self.base_url.path().trim_end_matches('/'),
            self.config.symbol
        );
        let mut url = self.base_url.clone();
        url.set_path(&path);
        url
    }
}

#[async_trait]
impl RecordSource for QuandlClient {
    async fn fetch_daily(&self) -> Result<Vec<DailyRecord>> {
        let url = self.dataset_url();
        info!(
            "Fetching {} from {} to {}",
            self.config.symbol, self.config.start_date, self.config.end_date
        );

        let start_date = self.config.start_date.to_string();
        let end_date = self.config.end_date.to_string();

        let response = self
            .client
            .get(url)
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("start_date", start_date.as_str()),
                ("end_date", end_date.as_str()),
                // Quandl returns newest-first by default; the engine expects
                // chronological ascending order.
                ("order", "asc"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            #[derive(Deserialize)]
            struct ErrorEnvelope {
                quandl_error: QuandlError,
            }

            #[derive(Deserialize)]
            struct QuandlError {
                code: String,
                message: String,
            }

            let body = response.text().await?;
            if let Ok(err) = serde_json::from_str::<ErrorEnvelope>(&body) {
                return Err(AppError::Provider(format!(
                    "{}: {}",
                    err.quandl_error.code, err.quandl_error.message
                )));
            }
            return Err(AppError::Provider(format!("HTTP {} from provider", status)));
        }

        let envelope: DatasetEnvelope = response.json().await?;
        let records = parse_dataset(&envelope.dataset)?;
        debug!("Fetched {} daily records", records.len());

        Ok(records)
    }
}

/// Convert a raw dataset payload into daily records
///
/// Columns are resolved by name so extra columns (Change, Turnover, ...) are
/// ignored. Prices may be null; a null or missing volume cell is rejected.
pub fn parse_dataset(dataset: &Dataset) -> Result<Vec<DailyRecord>> {
    let date_idx = column_index(&dataset.column_names, COL_DATE)?;
    let open_idx = column_index(&dataset.column_names, COL_OPEN)?;
    let high_idx = column_index(&dataset.column_names, COL_HIGH)?;
    let low_idx = column_index(&dataset.column_names, COL_LOW)?;
    let close_idx = column_index(&dataset.column_names, COL_CLOSE)?;
    let volume_idx = column_index(&dataset.column_names, COL_VOLUME)?;

    dataset
        .data
        .iter()
        .map(|row| {
            Ok(DailyRecord {
                date: date_cell(row, date_idx)?,
                open: optional_price_cell(row, open_idx, COL_OPEN)?,
                high: optional_price_cell(row, high_idx, COL_HIGH)?,
                low: optional_price_cell(row, low_idx, COL_LOW)?,
                close: optional_price_cell(row, close_idx, COL_CLOSE)?,
                traded_volume: required_number_cell(row, volume_idx, COL_VOLUME)?,
            })
        })
        .collect()
}

fn column_index(names: &[String], wanted: &str) -> Result<usize> {
    names
        .iter()
        .position(|n| n == wanted)
        .ok_or_else(|| AppError::InvalidInput(format!("Dataset is missing column '{}'", wanted)))
}

fn cell<'a>(row: &'a [Value], idx: usize, column: &str) -> Result<&'a Value> {
    row.get(idx).ok_or_else(|| {
        AppError::InvalidInput(format!("Row is too short, no cell for column '{}'", column))
    })
}

fn date_cell(row: &[Value], idx: usize) -> Result<NaiveDate> {
    let value = cell(row, idx, COL_DATE)?;
    let text = value
        .as_str()
        .ok_or_else(|| AppError::InvalidInput(format!("Date cell is not a string: {}", value)))?;
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| AppError::InvalidInput(format!("Invalid date '{}': {}", text, e)))
}

fn optional_price_cell(row: &[Value], idx: usize, column: &str) -> Result<Option<f64>> {
    match cell(row, idx, column)? {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        other => Err(AppError::InvalidInput(format!(
            "Column '{}' holds a non-numeric cell: {}",
            column, other
        ))),
    }
}

fn required_number_cell(row: &[Value], idx: usize, column: &str) -> Result<f64> {
    optional_price_cell(row, idx, column)?.ok_or_else(|| {
        AppError::InvalidInput(format!("Column '{}' holds a null cell", column))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dataset(value: Value) -> Dataset {
        serde_json::from_value(value).unwrap()
    }

    fn config() -> Config {
        Config::new(
            "secret",
            "FSE/AFX_X",
            "2017-01-01".parse().unwrap(),
            "2017-12-31".parse().unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_dataset_url_appends_symbol_path() {
        let base = Url::parse("http://localhost:8080/api/v3/datasets").unwrap();
        let client = QuandlClient::with_base_url(config(), base);

        assert_eq!(
            client.dataset_url().as_str(),
            "http://localhost:8080/api/v3/datasets/FSE/AFX_X.json"
        );
    }

    fn fse_columns() -> Value {
        json!([
            "Date",
            "Open",
            "High",
            "Low",
            "Close",
            "Change",
            "Traded Volume",
            "Turnover"
        ])
    }

    #[test]
    fn test_parse_dataset_maps_columns_by_name() {
        let dataset = dataset(json!({
            "column_names": fse_columns(),
            "data": [
                ["2017-01-02", 34.99, 35.94, 34.99, 35.80, null, 44700.0, 1590561.0],
                ["2017-01-03", 35.90, 35.93, 35.34, 35.48, null, 70618.0, 2515473.0],
            ],
        }));

        let records = parse_dataset(&dataset).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date.to_string(), "2017-01-02");
        assert_eq!(records[0].open, Some(34.99));
        assert_eq!(records[0].high, Some(35.94));
        assert_eq!(records[0].low, Some(34.99));
        assert_eq!(records[0].close, Some(35.80));
        assert_eq!(records[0].traded_volume, 44700.0);
        assert_eq!(records[1].traded_volume, 70618.0);
    }

    #[test]
    fn test_parse_dataset_null_prices_become_absent() {
        let dataset = dataset(json!({
            "column_names": fse_columns(),
            "data": [
                ["2017-04-14", null, 42.48, 41.985, 42.20, null, 88416.0, 3734717.0],
            ],
        }));

        let records = parse_dataset(&dataset).unwrap();

        assert_eq!(records[0].open, None);
        assert_eq!(records[0].high, Some(42.48));
    }

    #[test]
    fn test_parse_dataset_missing_column_rejected() {
        let dataset = dataset(json!({
            "column_names": ["Date", "Open", "High", "Low", "Close"],
            "data": [],
        }));

        let result = parse_dataset(&dataset);

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_dataset_short_row_rejected() {
        let dataset = dataset(json!({
            "column_names": fse_columns(),
            "data": [
                ["2017-01-02", 34.99, 35.94],
            ],
        }));

        let result = parse_dataset(&dataset);

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_dataset_null_volume_rejected() {
        let dataset = dataset(json!({
            "column_names": fse_columns(),
            "data": [
                ["2017-01-02", 34.99, 35.94, 34.99, 35.80, null, null, null],
            ],
        }));

        let result = parse_dataset(&dataset);

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
