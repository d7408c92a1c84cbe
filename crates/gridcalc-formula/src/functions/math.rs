//! Aggregate functions
//!
//! Each takes the already-resolved numbers of a range. An empty range gives
//! 0 for every aggregate.

/// SUM(range)
pub fn sum(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, v| acc + v)
}

/// AVERAGE(range)
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    sum(values) / values.len() as f64
}

/// MAX(range)
pub fn max(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// MIN(range)
pub fn min(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// COUNT(range)
///
/// Every resolved value is already a number, so this counts the cells of
/// the range that exist in the sheet.
pub fn count(values: &[f64]) -> f64 {
    values.len() as f64
}
