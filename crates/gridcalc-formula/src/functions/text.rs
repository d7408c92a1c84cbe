//! Text functions
//!
//! Each takes the stored text of one cell.

use gridcalc_core::trim_whitespace;

/// TRIM(cell): strip leading and trailing whitespace
///
/// Inner runs of spaces are left alone.
pub fn trim(text: &str) -> String {
    trim_whitespace(text).to_string()
}

/// UPPER(cell)
pub fn upper(text: &str) -> String {
    text.to_uppercase()
}

/// LOWER(cell)
pub fn lower(text: &str) -> String {
    text.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_trim_keeps_inner_spaces() {
        assert_eq!(trim("  a   b \t\n"), "a   b");
        assert_eq!(trim("   "), "");
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(upper(" Hello "), " HELLO ");
        assert_eq!(lower(" Hello "), " hello ");
        assert_eq!(upper("straße"), "STRASSE");
    }
}
