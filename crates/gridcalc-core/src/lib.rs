//! # gridcalc-core
//!
//! Core data structures for the gridcalc formula evaluator.
//!
//! This crate provides the fundamental types used throughout gridcalc:
//! - [`column_to_index`] and [`index_to_column`] - The column label codec
//! - [`CellAddress`] and [`CellRange`] - Cell addressing and ranges
//! - [`Cell`] and [`CellValue`] - What a sheet stores per identifier
//! - [`SheetState`] - The read-only cell map formulas are evaluated against
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_core::{CellAddress, SheetState, column_to_index, index_to_column};
//!
//! assert_eq!(column_to_index("AA").unwrap(), 26);
//! assert_eq!(index_to_column(701), "ZZ");
//!
//! let addr = CellAddress::parse("B3").unwrap();
//! assert_eq!((addr.row, addr.col), (2, 1));
//!
//! let mut sheet = SheetState::new();
//! sheet.set_value("B3", 42);
//! assert!(sheet.get_at(&addr).is_some());
//! ```

pub mod cell;
pub mod error;
pub mod sheet;

// Re-exports for convenience
pub use cell::{
    coerce_number, column_to_index, format_number, index_to_column, parse_numeric_text,
    trim_whitespace, Cell, CellAddress, CellRange, CellRangeIterator, CellValue,
};
pub use error::{Error, Result};
pub use sheet::{CellMap, SheetState};
