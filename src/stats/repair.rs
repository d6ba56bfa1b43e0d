//! Carry-forward repair for the opening-price series

use crate::error::{AppError, Result};

/// Fill absent opening prices by borrowing from the original series
///
/// Each absent element takes the nearest preceding present value of the
/// original (unrepaired) series; repaired values are never consulted during
/// the scan. The first element has no prior index to borrow from, so a
/// leading absence is an error rather than a silent guess.
pub fn repair_open_series(open: &[Option<f64>]) -> Result<Vec<f64>> {
    match open.first() {
        None => return Err(AppError::EmptySeries("open".to_string())),
        Some(None) => return Err(AppError::MissingLeadingValue("open".to_string())),
        Some(Some(_)) => {}
    }

    let mut repaired = Vec::with_capacity(open.len());
    for (i, value) in open.iter().enumerate() {
        match value {
            Some(price) => repaired.push(*price),
            None => {
                let prior = open[..i]
                    .iter()
                    .rev()
                    .find_map(|v| *v)
                    .ok_or_else(|| AppError::MissingLeadingValue("open".to_string()))?;
                repaired.push(prior);
            }
        }
    }

    Ok(repaired)
}
