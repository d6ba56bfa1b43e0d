//! Columnar statistics engine
//!
//! Pure, single-pass transformations: rows are reshaped into index-aligned
//! columns, the opening-price series is repaired, and the descriptive
//! statistics are computed as folds over the aligned index range. The engine
//! holds no state between invocations.

pub mod columnar;
pub mod repair;
pub mod summary;
