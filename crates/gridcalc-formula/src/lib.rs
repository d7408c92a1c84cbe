//! # gridcalc-formula
//!
//! Formula dispatch and evaluation for gridcalc.
//!
//! This crate provides:
//! - Formula parsing into a [`FunctionName`] tag plus its argument
//! - Range resolution with on-demand evaluation of formula cells
//! - The built-in functions: SUM, AVERAGE, MAX, MIN, COUNT, TRIM, UPPER, LOWER
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_core::SheetState;
//! use gridcalc_formula::{evaluate_formula, FormulaValue};
//!
//! let mut sheet = SheetState::new();
//! sheet.set_value("A1", 5);
//! sheet.set_formula("B1", "=SUM(A1:A1)");
//!
//! let result = evaluate_formula("=SUM(B1:B1)", &sheet).unwrap();
//! assert_eq!(result, FormulaValue::Number(5.0));
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod parser;
pub mod range;

pub use ast::{Formula, FunctionName};
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{
    evaluate_formula, EvaluationOptions, Evaluator, FormulaValue, DEFAULT_MAX_DEPTH,
};
pub use parser::{extract_argument, parse_formula};
pub use range::resolve_range;
