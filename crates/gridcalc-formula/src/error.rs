//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during formula evaluation
///
/// Unrecognized formulas, missing cells and non-numeric values are not
/// errors; they degrade to the formula text, a skipped cell and 0.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// A range argument without a column/row pair on one of its ends
    #[error("Invalid range format: {0:?}")]
    MalformedRange(String),

    /// Nested formula evaluation went deeper than the configured limit
    #[error("Formula nesting exceeded the maximum depth of {depth}")]
    DepthExceeded { depth: usize },

    /// A cell's formula led back to the same cell
    #[error("Circular reference detected involving cell {0}")]
    CircularReference(String),
}
