//! # gridcalc
//!
//! A minimal spreadsheet formula evaluator.
//!
//! Given a formula and a snapshot of the sheet's cells, gridcalc computes the
//! formula's value. Supported formulas are a single function call:
//!
//! - `SUM`, `AVERAGE`, `MAX`, `MIN`, `COUNT` over a range (`=SUM(A1:B3)`)
//! - `TRIM`, `UPPER`, `LOWER` of a single cell (`=TRIM(A1)`)
//!
//! Anything else is returned as written. Formula cells inside a range are
//! evaluated on demand, so a sheet never needs recalculating before use.
//!
//! ## Example
//!
//! ```rust
//! use gridcalc::prelude::*;
//!
//! let mut sheet = SheetState::new();
//! sheet.set_value("A1", 1);
//! sheet.set_value("A2", 2);
//! sheet.set_value("A3", 3);
//! sheet.set_value("B1", " Hello ");
//!
//! assert_eq!(evaluate_formula("=AVERAGE(A1:A3)", &sheet)?, FormulaValue::Number(2.0));
//! assert_eq!(evaluate_formula("=trim(b1)", &sheet)?.to_string(), "Hello");
//! assert_eq!(evaluate_formula("=FOO(A1)", &sheet)?.to_string(), "=FOO(A1)");
//! # Ok::<(), gridcalc::FormulaError>(())
//! ```
//!
//! ## Self-referencing sheets
//!
//! Nothing is cached and cycles are not looked for by default. A formula
//! that reaches its own cell recurses until the nesting limit in
//! [`EvaluationOptions`] is hit. Turn on
//! [`EvaluationOptions::detect_cycles`] to fail on the first repeated cell
//! instead.

pub mod prelude;

// Re-export core types
pub use gridcalc_core::{
    coerce_number, column_to_index, format_number, index_to_column, parse_numeric_text, Cell,
    CellAddress, CellMap, CellRange, CellValue, Error, Result, SheetState,
};

// Re-export formula types
pub use gridcalc_formula::{
    evaluate_formula, parse_formula, resolve_range, EvaluationOptions, Evaluator, Formula,
    FormulaError, FormulaResult, FormulaValue, FunctionName, DEFAULT_MAX_DEPTH,
};
