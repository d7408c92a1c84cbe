//! Sheet state: the cell map a formula is evaluated against

use crate::cell::{Cell, CellAddress, CellValue};
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Map from cell identifier ("A1") to cell
pub type CellMap = HashMap<String, Cell, ahash::RandomState>;

/// A snapshot of every cell in a sheet, keyed by identifier
///
/// The evaluator only ever borrows a `SheetState`; the host application owns
/// it and decides when values are refreshed.
///
/// ## Example
///
/// ```rust
/// use gridcalc_core::{Cell, SheetState};
///
/// let mut sheet = SheetState::new();
/// sheet.set_value("A1", 1);
/// sheet.set_formula("B1", "=SUM(A1:A1)");
///
/// assert_eq!(sheet.len(), 2);
/// assert_eq!(sheet.get("A1"), Some(&Cell::new(1)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SheetState {
    /// Cells by identifier. Identifiers not present are empty cells.
    pub data: CellMap,
}

impl SheetState {
    /// Create an empty sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cell by identifier
    pub fn get(&self, id: &str) -> Option<&Cell> {
        self.data.get(id)
    }

    /// Look up a cell by address
    pub fn get_at(&self, addr: &CellAddress) -> Option<&Cell> {
        self.data.get(&addr.to_a1_string())
    }

    /// Insert or replace a cell, returning the previous one
    pub fn insert<K: Into<String>>(&mut self, id: K, cell: Cell) -> Option<Cell> {
        self.data.insert(id.into(), cell)
    }

    /// Store a plain value, dropping any formula the cell had
    pub fn set_value<K: Into<String>, V: Into<CellValue>>(&mut self, id: K, value: V) {
        self.data.insert(id.into(), Cell::new(value));
    }

    /// Store a formula, keeping the cell's previous value as its cached value
    pub fn set_formula<K: Into<String>, F: Into<String>>(&mut self, id: K, formula: F) {
        let cell = self.data.entry(id.into()).or_default();
        cell.formula = Some(formula.into());
    }

    /// Remove a cell
    pub fn remove(&mut self, id: &str) -> Option<Cell> {
        self.data.remove(id)
    }

    /// Number of stored cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if no cells are stored
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over (identifier, cell) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cell)> + '_ {
        self.data.iter().map(|(id, cell)| (id.as_str(), cell))
    }
}

impl<K: Into<String>> FromIterator<(K, Cell)> for SheetState {
    fn from_iter<I: IntoIterator<Item = (K, Cell)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().map(|(id, cell)| (id.into(), cell)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_value_and_formula() {
        let mut sheet = SheetState::new();
        sheet.set_value("A1", 5);
        sheet.set_formula("A1", "=SUM(B1:B2)");

        let cell = sheet.get("A1").unwrap();
        assert_eq!(cell.value, CellValue::Number(5.0));
        assert_eq!(cell.formula.as_deref(), Some("=SUM(B1:B2)"));

        sheet.set_value("A1", "plain");
        assert_eq!(sheet.get("A1"), Some(&Cell::new("plain")));
    }

    #[test]
    fn test_get_at_uses_identifier() {
        let sheet: SheetState = vec![("AA12", Cell::new(3))].into_iter().collect();
        assert_eq!(
            sheet.get_at(&CellAddress::new(11, 26)),
            Some(&Cell::new(3))
        );
        assert_eq!(sheet.get_at(&CellAddress::new(0, 0)), None);
    }

    #[test]
    fn test_set_formula_on_missing_cell_defaults_value() {
        let mut sheet = SheetState::new();
        sheet.set_formula("C3", "=MAX(A1:B2)");
        assert_eq!(sheet.get("C3").unwrap().value, CellValue::text(""));
        assert_eq!(sheet.len(), 1);
        assert!(sheet.remove("C3").is_some());
        assert!(sheet.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_shape() {
        let json = r#"{"data":{"A1":{"value":1},"A2":{"value":" x "},"B1":{"value":1,"formula":"=SUM(A1:A1)"}}}"#;
        let sheet: SheetState = serde_json::from_str(json).unwrap();

        assert_eq!(sheet.get("A1"), Some(&Cell::new(1)));
        assert_eq!(sheet.get("A2"), Some(&Cell::new(" x ")));
        assert_eq!(
            sheet.get("B1"),
            Some(&Cell::with_formula(1, "=SUM(A1:A1)"))
        );

        let round: SheetState =
            serde_json::from_str(&serde_json::to_string(&sheet).unwrap()).unwrap();
        assert_eq!(round, sheet);
    }
}
