//! Cell-related types and utilities
//!
//! This module contains:
//! - [`column_to_index`] / [`index_to_column`] - the column label codec
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellRange`] - An inclusive rectangle of cells (e.g., "A1:B10")
//! - [`CellValue`] and [`Cell`] - What a sheet stores per identifier

mod address;
mod value;

pub use address::{column_to_index, index_to_column, CellAddress, CellRange, CellRangeIterator};
pub use value::{coerce_number, format_number, parse_numeric_text, trim_whitespace, Cell, CellValue};
