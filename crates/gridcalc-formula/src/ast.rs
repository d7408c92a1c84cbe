//! Parsed formula representation

/// The functions a formula can call
///
/// Matching is done on the uppercased formula body by prefix, in the order
/// of [`FunctionName::ALL`]; the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionName {
    Sum,
    Average,
    Max,
    Min,
    Count,
    Trim,
    Upper,
    Lower,
    /// Anything else; evaluates to the formula's own text
    Unknown,
}

impl FunctionName {
    /// Every recognized function, in matching priority order
    pub const ALL: [FunctionName; 8] = [
        FunctionName::Sum,
        FunctionName::Average,
        FunctionName::Max,
        FunctionName::Min,
        FunctionName::Count,
        FunctionName::Trim,
        FunctionName::Upper,
        FunctionName::Lower,
    ];

    /// Uppercase function name
    pub fn name(&self) -> &'static str {
        match self {
            FunctionName::Sum => "SUM",
            FunctionName::Average => "AVERAGE",
            FunctionName::Max => "MAX",
            FunctionName::Min => "MIN",
            FunctionName::Count => "COUNT",
            FunctionName::Trim => "TRIM",
            FunctionName::Upper => "UPPER",
            FunctionName::Lower => "LOWER",
            FunctionName::Unknown => "",
        }
    }

    /// Classify an uppercased formula body (the text after '=')
    ///
    /// ```
    /// use gridcalc_formula::FunctionName;
    ///
    /// assert_eq!(FunctionName::from_body("AVERAGE(A1:B2)"), FunctionName::Average);
    /// assert_eq!(FunctionName::from_body("SUMX(A1)"), FunctionName::Unknown);
    /// ```
    pub fn from_body(body: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| {
                body.strip_prefix(f.name())
                    .map_or(false, |rest| rest.starts_with('('))
            })
            .unwrap_or(FunctionName::Unknown)
    }

    /// Functions that reduce a range to a number
    pub fn is_aggregate(&self) -> bool {
        matches!(
            self,
            FunctionName::Sum
                | FunctionName::Average
                | FunctionName::Max
                | FunctionName::Min
                | FunctionName::Count
        )
    }

    /// Functions that transform the text of a single cell
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            FunctionName::Trim | FunctionName::Upper | FunctionName::Lower
        )
    }
}

/// A formula after parsing
#[derive(Debug, Clone, PartialEq)]
pub enum Formula {
    /// Text that does not start with '='; evaluates to itself
    Literal(String),
    /// A function call
    Call {
        /// Which function, possibly [`FunctionName::Unknown`]
        function: FunctionName,
        /// The uppercased text inside the first pair of parentheses, if any
        argument: Option<String>,
        /// The formula exactly as written
        source: String,
    },
}

impl Formula {
    /// The text this formula was parsed from
    pub fn source(&self) -> &str {
        match self {
            Formula::Literal(text) => text,
            Formula::Call { source, .. } => source,
        }
    }
}
