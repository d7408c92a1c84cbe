//! Tests for formula evaluation against a sheet

use gridcalc::prelude::*;
use gridcalc::{column_to_index, index_to_column, DEFAULT_MAX_DEPTH};
use pretty_assertions::assert_eq;

fn numbers_sheet() -> SheetState {
    let mut sheet = SheetState::new();
    sheet.set_value("A1", 1);
    sheet.set_value("A2", 2);
    sheet.set_value("A3", 3);
    sheet
}

/// Column labels and indices convert both ways for one and two letters
#[test]
fn test_column_codec_round_trip() {
    for (index, letters) in [(0, "A"), (25, "Z"), (26, "AA"), (51, "AZ"), (701, "ZZ")] {
        assert_eq!(index_to_column(index), letters);
        assert_eq!(column_to_index(letters).unwrap(), index);
    }

    for index in 0..=701 {
        assert_eq!(column_to_index(&index_to_column(index)).unwrap(), index);
    }
}

/// Test each aggregate over a plain column
#[test]
fn test_evaluate_aggregates() {
    let sheet = numbers_sheet();

    let cases = [
        ("=SUM(A1:A3)", 6.0),
        ("=AVERAGE(A1:A3)", 2.0),
        ("=MAX(A1:A3)", 3.0),
        ("=MIN(A1:A3)", 1.0),
        ("=COUNT(A1:A3)", 3.0),
    ];
    for (formula, expected) in cases {
        assert_eq!(
            evaluate_formula(formula, &sheet).unwrap(),
            FormulaValue::Number(expected),
            "{}",
            formula
        );
    }
}

/// Ranges over nothing, or running backwards, are empty rather than errors
#[test]
fn test_evaluate_empty_ranges() {
    let empty = SheetState::new();
    assert_eq!(
        evaluate_formula("=SUM(A1:A3)", &empty).unwrap(),
        FormulaValue::Number(0.0)
    );

    let sheet = numbers_sheet();
    for function in ["SUM", "AVERAGE", "MAX", "MIN", "COUNT"] {
        let formula = format!("={}(B5:A1)", function);
        assert_eq!(
            evaluate_formula(&formula, &sheet).unwrap(),
            FormulaValue::Number(0.0),
            "{}",
            formula
        );
    }
}

/// Test a rectangular range spanning several columns
#[test]
fn test_evaluate_rectangle() {
    let mut sheet = SheetState::new();
    for (row, values) in [[1, 2, 3], [4, 5, 6]].iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            let id = format!("{}{}", index_to_column(col as u32), row + 1);
            sheet.set_value(id, *value);
        }
    }
    sheet.set_value("Z1", 100);

    assert_eq!(
        evaluate_formula("=SUM(A1:C2)", &sheet).unwrap(),
        FormulaValue::Number(21.0)
    );
    assert_eq!(
        evaluate_formula("=AVERAGE(B1:C2)", &sheet).unwrap(),
        FormulaValue::Number(4.0)
    );
    assert_eq!(
        evaluate_formula("=MAX(A1:Z2)", &sheet).unwrap(),
        FormulaValue::Number(100.0)
    );
    assert_eq!(
        evaluate_formula("=COUNT(A1:Z2)", &sheet).unwrap(),
        FormulaValue::Number(7.0)
    );
}

/// Test the string cleanup functions
#[test]
fn test_evaluate_text_functions() {
    let mut sheet = SheetState::new();
    sheet.set_value("A1", " Hello ");

    assert_eq!(
        evaluate_formula("=TRIM(A1)", &sheet).unwrap(),
        FormulaValue::Text("Hello".into())
    );
    assert_eq!(
        evaluate_formula("=UPPER(A1)", &sheet).unwrap(),
        FormulaValue::Text(" HELLO ".into())
    );
    assert_eq!(
        evaluate_formula("=LOWER(A1)", &sheet).unwrap(),
        FormulaValue::Text(" hello ".into())
    );
}

/// Formula cells referenced by a range are evaluated, not read from cache
#[test]
fn test_evaluate_with_formula_cells() {
    let mut sheet = SheetState::new();
    sheet.set_value("A1", 5);
    sheet.insert("B1", Cell::with_formula(999, "=SUM(A1:A1)"));

    assert_eq!(
        evaluate_formula("=SUM(B1:B1)", &sheet).unwrap(),
        FormulaValue::Number(5.0)
    );

    // A chain of formulas, each one level deeper
    sheet.set_formula("C1", "=SUM(A1:B1)");
    sheet.set_formula("D1", "=AVERAGE(A1:C1)");
    assert_eq!(
        evaluate_formula("=MAX(A1:D1)", &sheet).unwrap(),
        FormulaValue::Number(10.0)
    );
    assert_eq!(
        evaluate_formula("=SUM(D1:D1)", &sheet).unwrap(),
        FormulaValue::Number(20.0 / 3.0)
    );
}

/// Text functions read the stored value even when the cell has a formula
#[test]
fn test_text_functions_do_not_recurse() {
    let mut sheet = SheetState::new();
    sheet.set_value("A1", 5);
    sheet.insert("B1", Cell::with_formula("old", "=SUM(A1:A1)"));

    assert_eq!(
        evaluate_formula("=UPPER(B1)", &sheet).unwrap(),
        FormulaValue::Text("OLD".into())
    );
}

/// Test that a range without a row number fails
#[test]
fn test_evaluate_malformed_range() {
    let sheet = numbers_sheet();
    let err = evaluate_formula("=SUM(A:B3)", &sheet).unwrap_err();
    assert_eq!(err, FormulaError::MalformedRange("A:B3".into()));
    assert_eq!(err.to_string(), "Invalid range format: \"A:B3\"");
}

/// Unknown functions and plain text come back unchanged
#[test]
fn test_evaluate_passthrough() {
    let sheet = numbers_sheet();
    for input in ["=FOO(A1)", "plain text", "42", "", "=SUM"] {
        assert_eq!(
            evaluate_formula(input, &sheet).unwrap(),
            FormulaValue::Text(input.into()),
            "{:?}",
            input
        );
    }
}

/// Test evaluating sheet cells the way a display layer would
#[test]
fn test_evaluate_cells_for_display() {
    let mut sheet = numbers_sheet();
    sheet.set_formula("B1", "=SUM(A1:A3)");
    sheet.set_formula("B2", "=average(a1:a3)");
    sheet.set_value("B3", "total");

    let evaluator = Evaluator::new(&sheet);
    let shown: Vec<String> = ["B1", "B2", "B3", "B4"]
        .iter()
        .map(|id| evaluator.evaluate_cell(id).unwrap().to_string())
        .collect();
    assert_eq!(shown, vec!["6", "2", "total", ""]);
}

/// Self-reference is bounded by the nesting limit, or caught when asked
#[test]
fn test_self_reference() {
    let mut sheet = numbers_sheet();
    sheet.set_formula("C1", "=SUM(A1:C1)");

    assert_eq!(
        evaluate_formula("=SUM(C1:C1)", &sheet),
        Err(FormulaError::DepthExceeded {
            depth: DEFAULT_MAX_DEPTH
        })
    );

    let options = EvaluationOptions::default().with_cycle_detection(true);
    assert_eq!(
        Evaluator::with_options(&sheet, options).evaluate("=SUM(C1:C1)"),
        Err(FormulaError::CircularReference("C1".into()))
    );
}

/// The same sheet can be evaluated from several threads at once
#[test]
fn test_concurrent_evaluation() {
    let mut sheet = numbers_sheet();
    sheet.set_formula("B1", "=SUM(A1:A3)");

    let sheet = &sheet;
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || evaluate_formula("=SUM(A1:B3)", sheet)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), FormulaValue::Number(12.0));
        }
    });
}

/// Row-0 identifiers are part of a range that starts on row 0
#[test]
fn test_evaluate_row_zero_range() {
    let mut sheet = SheetState::new();
    sheet.set_value("A0", 7);

    assert_eq!(
        evaluate_formula("=SUM(A0:A1)", &sheet).unwrap(),
        FormulaValue::Number(7.0)
    );
    assert_eq!(
        evaluate_formula("=SUM(A1:A2)", &sheet).unwrap(),
        FormulaValue::Number(0.0)
    );
}

/// A cell with an empty formula reads as its stored value
#[test]
fn test_evaluate_empty_formula_cell() {
    let mut sheet = SheetState::new();
    sheet.insert("A1", Cell::with_formula(5, ""));

    assert_eq!(
        evaluate_formula("=SUM(A1:A1)", &sheet).unwrap(),
        FormulaValue::Number(5.0)
    );
}
