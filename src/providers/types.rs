//! Common provider types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day for a single instrument
///
/// Price fields may be absent for a given day (the exchange reports gaps as
/// nulls); traded volume is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub traded_volume: f64,
}
