//! Fetch one date range of daily records and print the statistics report

use anyhow::Context;
use eod_stats::config::Config;
use eod_stats::providers::quandl::QuandlClient;
use eod_stats::services::report_service::ReportService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eod_stats=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let symbol = config.symbol.clone();
    let start_date = config.start_date;
    let end_date = config.end_date;

    let source = QuandlClient::new(config);
    let report = ReportService::run(&source)
        .await
        .with_context(|| format!("Failed to build report for {}", symbol))?;

    println!("Statistics for {} ({} to {})", symbol, start_date, end_date);
    println!("  Highest opening price:        {:.2}", report.highest_open);
    println!("  Lowest opening price:         {:.2}", report.lowest_open);
    println!(
        "  Largest one-day spread:       {:.2}",
        report.largest_one_day_spread
    );
    println!(
        "  Largest two-day close change: {:.2}",
        report.largest_two_day_close_change
    );
    println!("  Average traded volume:        {:.2}", report.average_volume);
    println!("  Median traded volume:         {}", report.median_volume);

    Ok(())
}
