//! Formula evaluator
//!
//! Evaluates formula text against a [`SheetState`]. Aggregate functions pull
//! numbers out of a range, evaluating any formula cells they meet on demand.
//! Nothing is cached and no evaluation order is imposed; a formula that
//! reaches itself recurses until [`EvaluationOptions::max_depth`] trips, or
//! fails fast when [`EvaluationOptions::detect_cycles`] is on.

use crate::ast::{Formula, FunctionName};
use crate::error::{FormulaError, FormulaResult};
use crate::functions::{math, text};
use crate::parser::parse_formula;
use gridcalc_core::{coerce_number, format_number, parse_numeric_text, CellValue, SheetState};
use std::fmt;

/// Default limit for nested formula evaluation
///
/// Sized to fit comfortably in a 2 MiB thread stack, the smallest a spawned
/// thread gets by default, in unoptimized builds too.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Value produced by evaluating a formula
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaValue {
    Number(f64),
    Text(String),
}

impl FormulaValue {
    /// Coerce to a number the same way range cells are coerced (0 on failure)
    pub fn to_number(&self) -> f64 {
        match self {
            FormulaValue::Number(n) => coerce_number(*n),
            FormulaValue::Text(s) => parse_numeric_text(s).map(coerce_number).unwrap_or(0.0),
        }
    }

    /// Get the number, if this is one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FormulaValue::Number(n) => Some(*n),
            FormulaValue::Text(_) => None,
        }
    }

    /// Get the text, if this is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormulaValue::Text(s) => Some(s),
            FormulaValue::Number(_) => None,
        }
    }

    /// Convert to display string
    pub fn as_string(&self) -> String {
        match self {
            FormulaValue::Number(n) => format_number(*n),
            FormulaValue::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for FormulaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl From<f64> for FormulaValue {
    fn from(n: f64) -> Self {
        FormulaValue::Number(n)
    }
}

impl From<String> for FormulaValue {
    fn from(s: String) -> Self {
        FormulaValue::Text(s)
    }
}

impl From<CellValue> for FormulaValue {
    fn from(value: CellValue) -> Self {
        match value {
            CellValue::Number(n) => FormulaValue::Number(n),
            CellValue::Text(s) => FormulaValue::Text(s),
        }
    }
}

impl From<FormulaValue> for CellValue {
    fn from(value: FormulaValue) -> Self {
        match value {
            FormulaValue::Number(n) => CellValue::Number(n),
            FormulaValue::Text(s) => CellValue::Text(s),
        }
    }
}

/// Options for formula evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationOptions {
    /// Maximum number of nested formula evaluations (None = unbounded)
    ///
    /// Every level is a handful of stack frames, so a higher limit needs a
    /// thread with a stack to match. Unbounded evaluation of a
    /// self-referencing sheet exhausts the stack.
    pub max_depth: Option<usize>,
    /// Fail with [`FormulaError::CircularReference`] when a cell's formula
    /// reaches the same cell again (default: false)
    pub detect_cycles: bool,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            detect_cycles: false,
        }
    }
}

impl EvaluationOptions {
    /// Set the nesting limit
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enable or disable cycle detection
    pub fn with_cycle_detection(mut self, detect_cycles: bool) -> Self {
        self.detect_cycles = detect_cycles;
        self
    }
}

/// Per-call bookkeeping for nested evaluation
#[derive(Debug, Default)]
pub(crate) struct Trail {
    depth: usize,
    /// Cells whose formulas are being evaluated, outermost first
    chain: Vec<String>,
}

/// Evaluates formulas against a borrowed sheet
///
/// ## Example
///
/// ```rust
/// use gridcalc_core::SheetState;
/// use gridcalc_formula::{Evaluator, FormulaValue};
///
/// let mut sheet = SheetState::new();
/// sheet.set_value("A1", 1);
/// sheet.set_value("A2", 2);
///
/// let evaluator = Evaluator::new(&sheet);
/// assert_eq!(evaluator.evaluate("=SUM(A1:A2)").unwrap(), FormulaValue::Number(3.0));
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator<'a> {
    pub(crate) sheet: &'a SheetState,
    pub(crate) options: EvaluationOptions,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator with default options
    pub fn new(sheet: &'a SheetState) -> Self {
        Self::with_options(sheet, EvaluationOptions::default())
    }

    /// Create an evaluator with custom options
    pub fn with_options(sheet: &'a SheetState, options: EvaluationOptions) -> Self {
        Self { sheet, options }
    }

    /// The options in effect
    pub fn options(&self) -> &EvaluationOptions {
        &self.options
    }

    /// Evaluate formula text
    ///
    /// Text that is not a formula, and formulas naming an unknown function,
    /// come back unchanged as [`FormulaValue::Text`].
    pub fn evaluate(&self, formula: &str) -> FormulaResult<FormulaValue> {
        self.evaluate_text(formula, &mut Trail::default())
    }

    /// Evaluate a cell the way it would be displayed
    ///
    /// A formula cell is evaluated (and counts as the first link of the cycle
    /// chain). A cell without a formula, or with an empty one, yields its
    /// stored value and a missing cell yields empty text.
    pub fn evaluate_cell(&self, id: &str) -> FormulaResult<FormulaValue> {
        let mut trail = Trail::default();
        match self.sheet.get(id) {
            None => Ok(FormulaValue::Text(String::new())),
            Some(cell) => match cell.formula.as_deref() {
                Some(formula) if !formula.is_empty() => {
                    self.evaluate_nested(id, formula, &mut trail)
                }
                _ => Ok(cell.value.clone().into()),
            },
        }
    }

    pub(crate) fn evaluate_text(
        &self,
        formula: &str,
        trail: &mut Trail,
    ) -> FormulaResult<FormulaValue> {
        let parsed = parse_formula(formula);
        log::trace!("evaluating {:?} at depth {}", parsed.source(), trail.depth);

        match parsed {
            Formula::Literal(text) => Ok(FormulaValue::Text(text)),
            Formula::Call {
                function,
                argument,
                source,
            } => self.call(function, argument.as_deref(), source, trail),
        }
    }

    fn call(
        &self,
        function: FunctionName,
        argument: Option<&str>,
        source: String,
        trail: &mut Trail,
    ) -> FormulaResult<FormulaValue> {
        if function.is_aggregate() {
            let values = self.range_values(argument.unwrap_or(""), trail)?;
            let result = match function {
                FunctionName::Sum => math::sum(&values),
                FunctionName::Average => math::average(&values),
                FunctionName::Max => math::max(&values),
                FunctionName::Min => math::min(&values),
                _ => math::count(&values),
            };
            return Ok(FormulaValue::Number(result));
        }

        if function.is_text() {
            let raw = self.raw_cell_text(argument);
            let result = match function {
                FunctionName::Trim => text::trim(&raw),
                FunctionName::Upper => text::upper(&raw),
                _ => text::lower(&raw),
            };
            return Ok(FormulaValue::Text(result));
        }

        log::debug!("unrecognized formula {:?}, returning it as text", source);
        Ok(FormulaValue::Text(source))
    }

    /// Evaluate the formula stored in cell `id` one level deeper
    pub(crate) fn evaluate_nested(
        &self,
        id: &str,
        formula: &str,
        trail: &mut Trail,
    ) -> FormulaResult<FormulaValue> {
        if self.options.detect_cycles && trail.chain.iter().any(|c| c == id) {
            log::debug!("cycle detected: {} -> {}", trail.chain.join(" -> "), id);
            return Err(FormulaError::CircularReference(id.to_string()));
        }

        if let Some(max_depth) = self.options.max_depth {
            if trail.depth >= max_depth {
                log::debug!("nesting limit {} reached at cell {}", max_depth, id);
                return Err(FormulaError::DepthExceeded { depth: max_depth });
            }
        }

        trail.depth += 1;
        if self.options.detect_cycles {
            trail.chain.push(id.to_string());
        }

        let result = self.evaluate_text(formula, trail);

        if self.options.detect_cycles {
            trail.chain.pop();
        }
        trail.depth -= 1;

        result
    }

    /// The stored value of a single cell as text, without evaluating its
    /// formula; missing cells read as empty text
    fn raw_cell_text(&self, id: Option<&str>) -> String {
        self.sheet
            .get(id.unwrap_or(""))
            .map(|cell| cell.value.as_string())
            .unwrap_or_default()
    }
}

/// Evaluate formula text against a sheet with default options
///
/// # Example
///
/// ```
/// use gridcalc_core::SheetState;
/// use gridcalc_formula::{evaluate_formula, FormulaValue};
///
/// let sheet = SheetState::new();
/// assert_eq!(
///     evaluate_formula("=SUM(A1:A3)", &sheet).unwrap(),
///     FormulaValue::Number(0.0)
/// );
/// assert_eq!(
///     evaluate_formula("plain text", &sheet).unwrap(),
///     FormulaValue::Text("plain text".into())
/// );
/// ```
pub fn evaluate_formula(formula: &str, sheet: &SheetState) -> FormulaResult<FormulaValue> {
    Evaluator::new(sheet).evaluate(formula)
}
