/// Signed floating-point literals.
///
/// Recognizes the longest literal (integer part, optional fraction, optional
/// exponent) starting exactly at the cursor.
pub mod number;

/// Named constants such as `e`, `pi` and `phi`.
///
/// Matches the longest known constant name at the cursor, honoring each
/// constant's case sensitivity.
pub mod constant;

pub use constant::lex_constant;
pub use number::lex_number;

/// A value recognized by one of the lexers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lexeme {
    /// The parsed value, sign included.
    pub value: f64,
    /// The leading `+` or `-` of the matched span, if there was one.
    pub sign:  Option<char>,
    /// Byte offset just past the matched span.
    pub end:   usize,
}

impl Lexeme {
    /// Returns the value with its leading sign removed again.
    ///
    /// Used when the sign turns out to be a binary operator.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::lexer::lex_number;
    ///
    /// let lexeme = lex_number("-2", 0).unwrap();
    /// assert_eq!(lexeme.value, -2.0);
    /// assert_eq!(lexeme.unsigned_value(), 2.0);
    /// ```
    #[must_use]
    pub fn unsigned_value(&self) -> f64 {
        match self.sign {
            Some('-') => -self.value,
            _ => self.value,
        }
    }

    /// Decides how the lexeme enters the token sequence.
    ///
    /// When the value directly follows another value, its leading sign is a
    /// binary operator and the unsigned value comes after it. Otherwise the
    /// signed value stands alone.
    ///
    /// # Returns
    /// The operator to emit first, if any, and the value of the number token.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::lexer::lex_number;
    ///
    /// let lexeme = lex_number("-2", 0).unwrap();
    /// assert_eq!(lexeme.split(true), (Some('-'), 2.0));
    /// assert_eq!(lexeme.split(false), (None, -2.0));
    /// ```
    #[must_use]
    pub fn split(&self, follows_value: bool) -> (Option<char>, f64) {
        match self.sign {
            Some(sign) if follows_value => (Some(sign), self.unsigned_value()),
            _ => (None, self.value),
        }
    }
}

/// Returns the sign character at the start of `s`, if any.
pub(crate) fn leading_sign(s: &str) -> Option<char> {
    s.chars().next().filter(|c| matches!(c, '+' | '-'))
}
