use std::fmt;

/// Symbols the reducer knows how to apply, in canonical form.
pub const OPERATORS: [char; 5] = ['^', '*', '/', '+', '-'];

/// A minimal lexical unit: a number or an operator symbol.
///
/// Parentheses never become tokens; they open and close scopes instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric value, from a literal, a constant or a collapsed group.
    Number(f64),
    /// An operator symbol after normalization.
    Operator(char),
}

impl Token {
    /// Builds an operator token, mapping alternate spellings to their
    /// canonical symbol.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::token::Token;
    ///
    /// assert_eq!(Token::operator('x'), Token::Operator('*'));
    /// assert_eq!(Token::operator('\''), Token::Operator('^'));
    /// assert_eq!(Token::operator('%'), Token::Operator('%'));
    /// ```
    #[must_use]
    pub const fn operator(symbol: char) -> Self {
        Self::Operator(normalize(symbol))
    }

    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    #[must_use]
    pub const fn number(&self) -> Option<f64> {
        match *self {
            Self::Number(n) => Some(n),
            Self::Operator(_) => None,
        }
    }

    #[must_use]
    pub const fn symbol(&self) -> Option<char> {
        match *self {
            Self::Operator(c) => Some(c),
            Self::Number(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(c) => write!(f, "{c}"),
        }
    }
}

/// Maps alternate operator spellings to canonical symbols.
///
/// `x` stands for `*` and `'` for `^`; every other character is returned
/// unchanged.
#[must_use]
pub const fn normalize(symbol: char) -> char {
    match symbol {
        'x' => '*',
        '\'' => '^',
        c => c,
    }
}

/// Returns whether `symbol` is one of the canonical operators.
#[must_use]
pub fn is_supported(symbol: char) -> bool {
    OPERATORS.contains(&symbol)
}

/// An ordered sequence of tokens owned by one scope.
///
/// Order follows the left to right appearance of the tokens in the source.
/// Reduction splices three tokens into one in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[must_use]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Replaces the triple starting at `start` with a single number.
    ///
    /// Tokens before `start` keep their index; tokens after the triple shift
    /// left by two.
    ///
    /// # Panics
    /// Panics if fewer than three tokens follow `start`.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::token::{Token, TokenSequence};
    ///
    /// let mut seq: TokenSequence = [Token::Number(1.0),
    ///                               Token::Operator('+'),
    ///                               Token::Number(2.0),
    ///                               Token::Operator('*'),
    ///                               Token::Number(4.0)].into_iter()
    ///                                                  .collect();
    /// seq.splice_triple(0, 3.0);
    /// assert_eq!(seq.as_slice(),
    ///            &[Token::Number(3.0), Token::Operator('*'), Token::Number(4.0)]);
    /// ```
    pub fn splice_triple(&mut self, start: usize, value: f64) {
        self.tokens.splice(start..start + 3, [Token::Number(value)]);
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }
}

impl FromIterator<Token> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self { tokens: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type IntoIter = std::slice::Iter<'a, Token>;
    type Item = &'a Token;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
