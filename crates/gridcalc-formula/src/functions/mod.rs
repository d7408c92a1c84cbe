//! Built-in functions
//!
//! - [`math`] - aggregates over the numbers of a range
//! - [`text`] - transforms of a single cell's text

pub mod math;
pub mod text;
