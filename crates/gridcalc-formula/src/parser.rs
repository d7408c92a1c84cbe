//! Formula parser
//!
//! Formulas are a single function call over a single argument, e.g.
//! `=SUM(A1:B3)` or `=trim(c2)`. There are no operators, nested calls or
//! argument lists.

use crate::ast::{Formula, FunctionName};
use lazy_regex::regex;

/// Parse formula text
///
/// Text not starting with '=' is a [`Formula::Literal`]. Otherwise the body
/// is uppercased (so both the function name and the argument are
/// case-insensitive) and classified into a [`FunctionName`].
///
/// # Example
///
/// ```
/// use gridcalc_formula::{parse_formula, Formula, FunctionName};
///
/// let formula = parse_formula("=sum(a1:a3)");
/// assert_eq!(
///     formula,
///     Formula::Call {
///         function: FunctionName::Sum,
///         argument: Some("A1:A3".to_string()),
///         source: "=sum(a1:a3)".to_string(),
///     }
/// );
/// ```
pub fn parse_formula(text: &str) -> Formula {
    let Some(body) = text.strip_prefix('=') else {
        return Formula::Literal(text.to_string());
    };

    let body = body.to_uppercase();

    Formula::Call {
        function: FunctionName::from_body(&body),
        argument: extract_argument(&body).map(str::to_string),
        source: text.to_string(),
    }
}

/// The text between the first '(' and the next ')' after it
///
/// Commas and further parentheses are not interpreted.
pub fn extract_argument(body: &str) -> Option<&str> {
    regex!(r"\((.*?)\)")
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
