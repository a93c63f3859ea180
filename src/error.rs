/// Grouping errors.
///
/// Defines the errors raised while the tokenizer splits the input into nested
/// parenthesized scopes: a group that is never closed, or a closing
/// parenthesis with nothing to close.
pub mod parse_error;
/// Reduction errors.
///
/// Contains the errors raised while a scope is collapsed into a single value:
/// operators missing an operand and symbols that are not operators at all.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Any error that aborts an evaluation.
pub enum Error {
    /// The parentheses of the input are unbalanced.
    Parse(ParseError),
    /// A scope could not be reduced to a value.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the byte offset in the source the error points at, if known.
    ///
    /// # Example
    /// ```
    /// use calc::evaluate;
    ///
    /// let err = evaluate("1 + 2)").unwrap_err();
    /// assert_eq!(err.position(), Some(5));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Parse(e) => Some(e.pos()),
            Self::Runtime(_) => None,
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
