//! Row-to-column reshaping

use crate::error::{AppError, Result};
use crate::providers::types::DailyRecord;
use chrono::NaiveDate;
use serde::Serialize;

/// Daily records reshaped into one sequence per field
///
/// All columns have equal length and index `i` in every column refers to the
/// same calendar day. Ordering is whatever the record source supplied; the
/// engine never re-sorts.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnarDataset {
    pub dates: Vec<NaiveDate>,
    pub open: Vec<Option<f64>>,
    pub high: Vec<Option<f64>>,
    pub low: Vec<Option<f64>>,
    pub close: Vec<Option<f64>>,
    pub traded_volume: Vec<f64>,
}

impl ColumnarDataset {
    /// Number of trading days in the dataset
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Reshape row-oriented daily records into a columnar dataset
///
/// Preserves input length and order. Downstream statistics are undefined on
/// zero records, so an empty input is rejected here.
pub fn reshape(records: &[DailyRecord]) -> Result<ColumnarDataset> {
    if records.is_empty() {
        return Err(AppError::InvalidInput(
            "Record sequence is empty".to_string(),
        ));
    }

    let mut dataset = ColumnarDataset {
        dates: Vec::with_capacity(records.len()),
        open: Vec::with_capacity(records.len()),
        high: Vec::with_capacity(records.len()),
        low: Vec::with_capacity(records.len()),
        close: Vec::with_capacity(records.len()),
        traded_volume: Vec::with_capacity(records.len()),
    };

    for record in records {
        dataset.dates.push(record.date);
        dataset.open.push(record.open);
        dataset.high.push(record.high);
        dataset.low.push(record.low);
        dataset.close.push(record.close);
        dataset.traded_volume.push(record.traded_volume);
    }

    Ok(dataset)
}
