//! eod-stats - End-of-Day Trading Statistics
//!
//! Fetches daily trading records for a single instrument from a Quandl-style
//! provider and reduces them to a small set of descriptive statistics:
//! extreme opening prices, the largest single-day high/low spread, the largest
//! day-over-day closing move, and the average and median traded volume.

pub mod config;
pub mod error;
pub mod providers;
pub mod services;
pub mod stats;
