//! Record-source providers

pub mod quandl;
pub mod types;

use crate::error::Result;
use async_trait::async_trait;
use types::DailyRecord;

/// Source of daily trading records for a single instrument
///
/// Implementations return records in chronological (ascending) order for the
/// configured inclusive date range. The statistics engine relies on that
/// ordering and never re-sorts.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch all daily records for the configured symbol and date range
    async fn fetch_daily(&self) -> Result<Vec<DailyRecord>>;
}
