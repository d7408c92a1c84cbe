//! Range resolution
//!
//! Turns a range argument such as `A1:B3` into the numbers an aggregate
//! function works on.

use crate::error::{FormulaError, FormulaResult};
use crate::evaluator::{Evaluator, Trail};
use gridcalc_core::{column_to_index, index_to_column, Cell, CellAddress, CellRange};
use lazy_regex::regex;

/// One end of a range: column index and the row number as written (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Endpoint {
    col: u32,
    row_number: u32,
}

/// Parse a range argument leniently
///
/// The text is split on ':' and only the first two pieces are used. From
/// each piece the first run of uppercase letters is the column and the first
/// run of digits is the row, wherever they appear. The corners are not
/// reordered, so `B5:A1` is a valid range that covers nothing. A row
/// number of 0 has no place in a [`CellRange`]; see [`Evaluator::range_values`]
/// for how such rows are still visited.
///
/// ```
/// use gridcalc_formula::resolve_range;
///
/// let range = resolve_range("A1:B3").unwrap();
/// assert_eq!(range.to_string(), "A1:B3");
/// assert!(resolve_range("A:B3").is_err());
/// ```
pub fn resolve_range(text: &str) -> FormulaResult<CellRange> {
    let (start, end) = parse_corners(text)?;
    Ok(to_cell_range(start, end))
}

fn parse_corners(text: &str) -> FormulaResult<(Endpoint, Endpoint)> {
    let mut pieces = text.split(':');
    let start = pieces.next().and_then(parse_endpoint);
    let end = pieces.next().and_then(parse_endpoint);

    match (start, end) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => {
            log::debug!("malformed range {:?}", text);
            Err(FormulaError::MalformedRange(text.to_string()))
        }
    }
}

fn parse_endpoint(text: &str) -> Option<Endpoint> {
    let letters = regex!(r"[A-Z]+").find(text)?;
    let digits = regex!(r"[0-9]+").find(text)?;

    Some(Endpoint {
        col: column_to_index(letters.as_str()).ok()?,
        row_number: digits.as_str().parse().ok()?,
    })
}

/// The rows numbered from 1: a start on row 0 begins at the first row and an
/// end on row 0 leaves nothing to visit.
fn to_cell_range(start: Endpoint, end: Endpoint) -> CellRange {
    let start_row = start.row_number.saturating_sub(1);
    match end.row_number.checked_sub(1) {
        Some(end_row) => CellRange::new(
            CellAddress::new(start_row, start.col),
            CellAddress::new(end_row, end.col),
        ),
        None => CellRange::new(
            CellAddress::new(1, start.col),
            CellAddress::new(0, end.col),
        ),
    }
}

impl<'a> Evaluator<'a> {
    /// The numeric values of every present cell in the range, row-major
    ///
    /// Cells missing from the sheet are skipped; present cells are coerced
    /// with [`Evaluator::cell_number`]. When the range starts on row 0, the
    /// row-0 identifiers (`A0`, `B0`, ...) across the range's columns come
    /// first, ahead of the rows numbered from 1.
    pub(crate) fn range_values(&self, text: &str, trail: &mut Trail) -> FormulaResult<Vec<f64>> {
        let (start, end) = parse_corners(text)?;
        let range = to_cell_range(start, end);
        log::trace!("resolving {} ({} cells)", range, range.cell_count());

        let row_zero = (start.row_number == 0)
            .then(|| start.col..=end.col)
            .into_iter()
            .flatten()
            .map(|col| format!("{}0", index_to_column(col)));
        let ids = row_zero.chain(range.cells().map(|addr| addr.to_a1_string()));

        let mut values = Vec::new();
        for id in ids {
            match self.sheet.get(&id) {
                Some(cell) => values.push(self.cell_number(&id, cell, trail)?),
                // Missing cells contribute nothing, not even a zero
                None => continue,
            }
        }

        Ok(values)
    }

    /// Coerce a present cell to a number, evaluating its formula if it has
    /// a non-empty one; anything that is not a number becomes 0
    pub(crate) fn cell_number(
        &self,
        id: &str,
        cell: &Cell,
        trail: &mut Trail,
    ) -> FormulaResult<f64> {
        match cell.formula.as_deref() {
            Some(formula) if !formula.is_empty() => {
                Ok(self.evaluate_nested(id, formula, trail)?.to_number())
            }
            _ => Ok(cell.value.to_number()),
        }
    }
}
