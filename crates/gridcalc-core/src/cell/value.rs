//! Cell value types and numeric coercion

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The scalar stored in a cell: either a number or a piece of text
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum CellValue {
    /// Numeric value
    Number(f64),
    /// Text value
    Text(String),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Coerce to a number, substituting 0 for anything that is not one
    ///
    /// Text goes through [`parse_numeric_text`]; numbers pass through
    /// [`coerce_number`].
    ///
    /// ```
    /// use gridcalc_core::CellValue;
    ///
    /// assert_eq!(CellValue::text(" 12 ").to_number(), 12.0);
    /// assert_eq!(CellValue::text("abc").to_number(), 0.0);
    /// ```
    pub fn to_number(&self) -> f64 {
        match self {
            CellValue::Number(n) => coerce_number(*n),
            CellValue::Text(s) => parse_numeric_text(s).map(coerce_number).unwrap_or(0.0),
        }
    }

    /// The display form of the value
    pub fn as_string(&self) -> String {
        match self {
            CellValue::Number(n) => format_number(*n),
            CellValue::Text(s) => s.clone(),
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Text(String::new())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => f.write_str(&format_number(*n)),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(f64::from(n))
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

/// A single cell: its last known value and an optional formula
///
/// When `formula` is present, evaluating it is expected to reproduce
/// `value`, but nothing here keeps the two in sync.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    /// The last computed or literal value
    pub value: CellValue,
    /// Formula text, starting with '='
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub formula: Option<String>,
}

impl Cell {
    /// Create a plain value cell
    pub fn new<V: Into<CellValue>>(value: V) -> Self {
        Self {
            value: value.into(),
            formula: None,
        }
    }

    /// Create a formula cell with a (possibly stale) cached value
    pub fn with_formula<V: Into<CellValue>, F: Into<String>>(value: V, formula: F) -> Self {
        Self {
            value: value.into(),
            formula: Some(formula.into()),
        }
    }

    /// Check if the cell holds a formula
    pub fn has_formula(&self) -> bool {
        self.formula.is_some()
    }
}

/// Normalize a number the way falsy values collapse to 0: NaN and -0 become 0
pub fn coerce_number(n: f64) -> f64 {
    if n.is_nan() || n == 0.0 {
        0.0
    } else {
        n
    }
}

/// Parse text as a number using spreadsheet-host numeric conversion
///
/// Surrounding whitespace is ignored and whitespace-only text is 0. Accepts
/// decimal literals with an optional sign and exponent, `Infinity` with an
/// optional sign, and unsigned `0x`/`0o`/`0b` integer literals. Returns
/// `None` when the text is not a number.
pub fn parse_numeric_text(s: &str) -> Option<f64> {
    let t = trim_whitespace(s);
    if t.is_empty() {
        return Some(0.0);
    }

    match t {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(n) = parse_radix_literal(t) {
        return Some(n);
    }

    if is_decimal_literal(t) {
        t.parse().ok()
    } else {
        None
    }
}

/// Trim leading and trailing whitespace, including the byte-order mark
pub fn trim_whitespace(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn parse_radix_literal(t: &str) -> Option<f64> {
    let bytes = t.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }

    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    t[2..].chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

fn is_decimal_literal(t: &str) -> bool {
    let body = t.strip_prefix(['+', '-']).unwrap_or(t);

    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, f),
        None => (mantissa, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return false;
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !digits.is_empty() && all_digits(digits)
        }
    }
}

/// Format a number the way a spreadsheet cell displays it
///
/// Whole numbers print without a fractional part, very large or very small
/// magnitudes switch to exponent notation (`1e+21`, `1e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", n);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }

    format!("{}", n)
}
