//! Descriptive statistics over aligned daily series
//!
//! All reductions are single-pass folds. The spread and close-change maxima
//! start from a zero accumulator, so they are floored at 0 and skip days where
//! a required value is absent.

use crate::error::{AppError, Result};

/// Maximum of a series
pub fn highest(series: &[f64]) -> Result<f64> {
    if series.is_empty() {
        return Err(AppError::EmptySeries("highest".to_string()));
    }
    Ok(series.iter().fold(f64::MIN, |acc, v| acc.max(*v)))
}

/// Minimum of a series
pub fn lowest(series: &[f64]) -> Result<f64> {
    if series.is_empty() {
        return Err(AppError::EmptySeries("lowest".to_string()));
    }
    Ok(series.iter().fold(f64::MAX, |acc, v| acc.min(*v)))
}

/// Largest single-day high/low spread, floored at 0
///
/// Days where either the high or the low is absent contribute nothing.
pub fn largest_one_day_spread(high: &[Option<f64>], low: &[Option<f64>]) -> f64 {
    high.iter()
        .copied()
        .zip(low.iter().copied())
        .filter_map(|(h, l)| Some(h? - l?))
        .fold(0.0, f64::max)
}

/// Largest absolute day-over-day closing-price move, floored at 0
///
/// Absent closing prices are skipped in the traversal, so each present value
/// is compared with the nearest preceding present value.
pub fn largest_two_day_close_change(close: &[Option<f64>]) -> f64 {
    close
        .iter()
        .filter_map(|v| *v)
        .fold((0.0_f64, None::<f64>), |(best, prev), value| {
            let best = match prev {
                Some(prev) => best.max((value - prev).abs()),
                None => best,
            };
            (best, Some(value))
        })
        .0
}

/// Arithmetic mean of a series
pub fn average(series: &[f64]) -> Result<f64> {
    if series.is_empty() {
        return Err(AppError::EmptySeries("average".to_string()));
    }
    Ok(series.iter().sum::<f64>() / series.len() as f64)
}

/// Median of a series
///
/// Sorts a copy and uses the standard middle element (odd length) or the mean
/// of the standard middle pair (even length). The original script indexed the
/// unsorted chronological series and took indices `m` and `m + 1` for even
/// lengths; both of those behaviors were defects and are deliberately not
/// reproduced.
pub fn median(series: &[f64]) -> Result<f64> {
    if series.is_empty() {
        return Err(AppError::EmptySeries("median".to_string()));
    }

    let mut sorted = series.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Round to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
