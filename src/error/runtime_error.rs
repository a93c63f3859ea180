#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while reducing a scope to a value.
pub enum RuntimeError {
    /// An operator lacks a numeric operand on one or both sides.
    ///
    /// `operator` is `None` when a scope still holds several values after
    /// every tier has been reduced, i.e. two values with no operator between
    /// them.
    SyntaxError {
        /// The operator that could not be applied.
        operator: Option<char>,
    },
    /// A symbol that is not one of `^`, `*`, `/`, `+` or `-` was used as an
    /// operator.
    UnsupportedOperator {
        /// The offending symbol, after normalization.
        operator: char,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SyntaxError { operator: Some(op) } => {
                write!(f, "Syntax error: Operator '{op}' is missing an operand.")
            },
            Self::SyntaxError { operator: None } => {
                write!(f, "Syntax error: Missing an operator between two values.")
            },
            Self::UnsupportedOperator { operator } => {
                write!(f, "Unsupported operator: '{operator}'.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
