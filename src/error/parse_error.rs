#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while grouping the input into scopes.
pub enum ParseError {
    /// The input ended while a parenthesized group was still open.
    UnmatchedOpenParen {
        /// Byte offset of the innermost `(` that was never closed.
        pos: usize,
    },
    /// A `)` was found with no open group to close.
    UnmatchedCloseParen {
        /// Byte offset of the stray `)`.
        pos: usize,
    },
}

impl ParseError {
    /// Returns the byte offset in the source at which the error was detected.
    #[must_use]
    pub const fn pos(&self) -> usize {
        match *self {
            Self::UnmatchedOpenParen { pos } | Self::UnmatchedCloseParen { pos } => pos,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmatchedOpenParen { pos } => write!(f,
                                                       "Error at column {}: Opening parenthesis '(' is never closed.",
                                                       pos + 1),
            Self::UnmatchedCloseParen { pos } => write!(f,
                                                        "Error at column {}: Closing parenthesis ')' has no matching '('.",
                                                        pos + 1),
        }
    }
}

impl std::error::Error for ParseError {}
