//! Prelude module - common imports for gridcalc users
//!
//! ```rust
//! use gridcalc::prelude::*;
//! ```

pub use crate::{
    // Cell types
    Cell,
    CellAddress,
    CellRange,
    CellValue,
    // Evaluation
    evaluate_formula,
    EvaluationOptions,
    Evaluator,
    // Error types
    FormulaError,
    FormulaResult,
    FormulaValue,
    SheetState,
};
