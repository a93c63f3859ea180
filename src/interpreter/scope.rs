use tracing::debug;

use crate::{
    error::{ParseError, Result},
    interpreter::{
        reducer::reduce,
        token::{Token, TokenSequence},
    },
};

/// One level of parenthesis nesting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    /// Tokens collected inside this group so far.
    pub tokens:    TokenSequence,
    /// Byte offset of the `(` that opened the group, `None` for the outermost
    /// scope.
    pub opened_at: Option<usize>,
}

/// The stack of open scopes.
///
/// The outermost scope sits at the bottom and is never popped. The enclosing
/// scope of any group is the one directly below it, which is where its
/// collapsed value is appended.
///
/// # Example
/// ```
/// use calc::interpreter::{scope::ScopeStack, token::Token};
///
/// let mut scopes = ScopeStack::new();
/// scopes.push(Token::Number(2.0));
/// scopes.push(Token::Operator('*'));
///
/// scopes.enter(2);
/// scopes.push(Token::Number(1.0));
/// scopes.push(Token::Operator('+'));
/// scopes.push(Token::Number(3.0));
/// let value = scopes.leave(8).unwrap();
/// assert_eq!(value, 4.0);
///
/// assert_eq!(scopes.depth(), 0);
/// scopes.push(Token::Number(value));
/// assert_eq!(scopes.finish(), Ok(8.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    /// Creates a stack holding only an empty outermost scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![Scope::default()] }
    }

    /// Number of open groups; `0` when only the outermost scope remains.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len() - 1
    }

    #[must_use]
    pub fn current(&self) -> &Scope {
        &self.scopes[self.scopes.len() - 1]
    }

    /// Appends a token to the innermost open scope.
    pub fn push(&mut self, token: Token) {
        let last = self.scopes.len() - 1;
        self.scopes[last].tokens.push(token);
    }

    /// Opens a new, empty group for a `(` at byte offset `pos`.
    pub fn enter(&mut self, pos: usize) {
        self.scopes.push(Scope { tokens:    TokenSequence::new(),
                                 opened_at: Some(pos), });
        debug!(depth = self.depth(), pos, "entered scope");
    }

    /// Closes the innermost group for a `)` at byte offset `pos`.
    ///
    /// The group is reduced to a single value and discarded. The enclosing
    /// scope becomes current; the caller appends the value to it.
    ///
    /// # Errors
    /// - `UnmatchedCloseParen` if only the outermost scope is open.
    /// - Any reduction error raised while collapsing the group.
    pub fn leave(&mut self, pos: usize) -> Result<f64> {
        if self.depth() == 0 {
            return Err(ParseError::UnmatchedCloseParen { pos }.into());
        }

        let mut scope = self.scopes.pop().unwrap_or_default();
        let value = reduce(&mut scope.tokens)?;
        debug!(depth = self.depth(), value, "left scope");
        Ok(value)
    }

    /// Reduces the outermost scope once the whole input has been consumed.
    ///
    /// # Errors
    /// - `UnmatchedOpenParen` if a group is still open, pointing at the
    ///   innermost unclosed `(`.
    /// - Any reduction error raised while collapsing the outermost scope.
    pub fn finish(mut self) -> Result<f64> {
        if let Some(pos) = self.current().opened_at {
            return Err(ParseError::UnmatchedOpenParen { pos }.into());
        }

        let mut outermost = self.scopes.pop().unwrap_or_default();
        Ok(reduce(&mut outermost.tokens)?)
    }
}
