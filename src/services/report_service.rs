//! Report Service
//!
//! Orchestrates the full run: fetch daily records, reshape them into columns,
//! repair the opening-price series, and reduce everything into one
//! `StatisticsReport`. The report is all-or-nothing; any failure along the way
//! propagates and no partial report is ever produced.

use crate::error::Result;
use crate::providers::types::DailyRecord;
use crate::providers::RecordSource;
use crate::stats::columnar::reshape;
use crate::stats::repair::repair_open_series;
use crate::stats::summary;
use serde::Serialize;
use tracing::info;

/// Descriptive statistics for one instrument over one date range
///
/// All values are rounded to 2 decimal places except `median_volume`, which is
/// reported as computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    pub highest_open: f64,
    pub lowest_open: f64,
    pub largest_one_day_spread: f64,
    pub largest_two_day_close_change: f64,
    pub average_volume: f64,
    pub median_volume: f64,
}

/// Report service for business logic
pub struct ReportService;

impl ReportService {
    /// Fetch records from the source and summarize them
    pub async fn run(source: &dyn RecordSource) -> Result<StatisticsReport> {
        let records = source.fetch_daily().await?;
        info!("ReportService::run - {} records fetched", records.len());

        Self::summarize(&records)
    }

    /// Compute the statistics report over an in-hand record sequence
    pub fn summarize(records: &[DailyRecord]) -> Result<StatisticsReport> {
        let dataset = reshape(records)?;
        let open = repair_open_series(&dataset.open)?;

        Ok(StatisticsReport {
            highest_open: summary::round2(summary::highest(&open)?),
            lowest_open: summary::round2(summary::lowest(&open)?),
            largest_one_day_spread: summary::round2(summary::largest_one_day_spread(
                &dataset.high,
                &dataset.low,
            )),
            largest_two_day_close_change: summary::round2(
                summary::largest_two_day_close_change(&dataset.close),
            ),
            average_volume: summary::round2(summary::average(&dataset.traded_volume)?),
            median_volume: summary::median(&dataset.traded_volume)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use async_trait::async_trait;

    struct FixtureSource {
        records: Vec<DailyRecord>,
    }

    #[async_trait]
    impl RecordSource for FixtureSource {
        async fn fetch_daily(&self) -> Result<Vec<DailyRecord>> {
            Ok(self.records.clone())
        }
    }

    fn record(
        date: &str,
        open: Option<f64>,
        high: f64,
        low: f64,
        close: Option<f64>,
        volume: f64,
    ) -> DailyRecord {
        DailyRecord {
            date: date.parse().unwrap(),
            open,
            high: Some(high),
            low: Some(low),
            close,
            traded_volume: volume,
        }
    }

    fn fixture_records() -> Vec<DailyRecord> {
        vec![
            record("2017-01-02", Some(34.99), 35.94, 34.99, Some(35.80), 100.0),
            record("2017-01-03", None, 35.93, 35.34, Some(35.48), 200.0),
            record("2017-01-04", Some(35.48), 35.51, 34.75, None, 300.0),
            record("2017-01-05", Some(35.02), 35.20, 34.73, Some(35.06), 400.0),
        ]
    }

    #[tokio::test]
    async fn test_run_builds_full_report() {
        let source = FixtureSource {
            records: fixture_records(),
        };

        let report = ReportService::run(&source).await.unwrap();

        // Open series repaired to [34.99, 34.99, 35.48, 35.02]
        assert_eq!(report.highest_open, 35.48);
        assert_eq!(report.lowest_open, 34.99);
        // Widest day is 2017-01-02: 35.94 - 34.99
        assert_eq!(report.largest_one_day_spread, 0.95);
        // Close gap on 2017-01-04 is bridged: |35.06 - 35.48| vs |35.48 - 35.80|
        assert_eq!(report.largest_two_day_close_change, 0.42);
        assert_eq!(report.average_volume, 250.0);
        // Even length, standard middle pair of the sorted volumes
        assert_eq!(report.median_volume, 250.0);
    }

    #[tokio::test]
    async fn test_empty_source_rejected() {
        let source = FixtureSource { records: vec![] };

        let result = ReportService::run(&source).await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_summarize_never_partial_on_bad_open_series() {
        let mut records = fixture_records();
        records[0].open = None;

        let result = ReportService::summarize(&records);

        assert!(matches!(result, Err(AppError::MissingLeadingValue(_))));
    }
}
