use tracing::trace;

use crate::{
    error::Result,
    interpreter::{
        lexer::{lex_constant, lex_number},
        scope::ScopeStack,
        token::Token,
    },
};

/// Walks a cursor across the input, producing tokens into nested scopes.
///
/// Parentheses never become tokens: `(` opens a scope and `)` collapses the
/// current one into a single number appended to its parent. Groups still open
/// when the input runs out are left on the returned stack;
/// [`ScopeStack::finish`] rejects them.
///
/// # Example
/// ```
/// use calc::interpreter::{token::Token, tokenizer::Tokenizer};
///
/// let scopes = Tokenizer::new("2 x (1 + 3)").tokenize().unwrap();
/// assert_eq!(scopes.current().tokens.as_slice(),
///            &[Token::Number(2.0), Token::Operator('*'), Token::Number(4.0)]);
/// ```
#[derive(Debug)]
pub struct Tokenizer<'a> {
    source: &'a str,
    cursor: usize,
    scopes: ScopeStack,
}

impl<'a> Tokenizer<'a> {
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { source,
               cursor: 0,
               scopes: ScopeStack::new() }
    }

    /// Consumes the whole input.
    ///
    /// Whitespace is skipped. Anything that is neither a parenthesis, a
    /// number nor a constant becomes an operator token after normalization,
    /// supported or not; the reducer rejects unknown symbols later.
    ///
    /// # Errors
    /// - `UnmatchedCloseParen` for a `)` with no open group.
    /// - Any reduction error raised while collapsing a closed group.
    pub fn tokenize(mut self) -> Result<ScopeStack> {
        while let Some(c) = self.source[self.cursor..].chars().next() {
            match c {
                c if c.is_whitespace() => self.cursor += c.len_utf8(),
                '(' => {
                    self.scopes.enter(self.cursor);
                    self.cursor += 1;
                },
                ')' => {
                    let value = self.scopes.leave(self.cursor)?;
                    self.scopes.push(Token::Number(value));
                    self.cursor += 1;
                },
                _ => self.lex_value_or_operator(c),
            }
        }

        Ok(self.scopes)
    }

    /// Tries a number, then a constant, falling back to a one character
    /// operator.
    ///
    /// A signed value that directly follows another value is split in two:
    /// `3 -2` is `3 - 2`, while `3 * -2` and `-2 + 3` keep the signed literal.
    fn lex_value_or_operator(&mut self, c: char) {
        let (source, cursor) = (self.source, self.cursor);
        let lexeme = lex_number(source, cursor).or_else(|| lex_constant(source, cursor));

        let Some(lexeme) = lexeme else {
            let token = Token::operator(c);
            trace!(pos = self.cursor, %token, "operator");
            self.scopes.push(token);
            self.cursor += c.len_utf8();
            return;
        };

        let follows_value = self.scopes.current().tokens.last().is_some_and(Token::is_number);

        let (operator, value) = lexeme.split(follows_value);

        if let Some(sign) = operator {
            trace!(pos = self.cursor, %sign, "sign read as operator");
            self.scopes.push(Token::Operator(sign));
        }
        trace!(pos = self.cursor, value, "value");
        self.scopes.push(Token::Number(value));

        self.cursor = lexeme.end;
    }
}
