use logos::Logos;

use crate::interpreter::lexer::{Lexeme, leading_sign};

/// The only token this lexer produces.
#[derive(Logos, Debug, PartialEq)]
enum Literal {
    /// Numeric literals such as `42`, `-3.5`, `.5`, `1.` or `+2.1e-10`.
    #[regex(r"[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", parse_float)]
    Number(f64),
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Literal>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Recognizes a signed floating-point literal starting exactly at `cursor`.
///
/// The longest valid literal wins, so `2e3` is one literal while `2e` stops
/// after the `2`. Whitespace is not skipped.
///
/// # Parameters
/// - `source`: The full input.
/// - `cursor`: Byte offset to start at.
///
/// # Returns
/// - `Some(Lexeme)` with the value and the offset just past the literal.
/// - `None` if no literal starts at `cursor`. A literal zero is a match like
///   any other value.
///
/// # Example
/// ```
/// use calc::interpreter::lexer::lex_number;
///
/// let lexeme = lex_number("3 + 2.5e1", 4).unwrap();
/// assert_eq!(lexeme.value, 25.0);
/// assert_eq!(lexeme.end, 9);
///
/// assert_eq!(lex_number("0", 0).unwrap().value, 0.0);
/// assert!(lex_number("pi", 0).is_none());
/// ```
#[must_use]
pub fn lex_number(source: &str, cursor: usize) -> Option<Lexeme> {
    let rest = source.get(cursor..)?;
    let mut lexer = Literal::lexer(rest);

    match lexer.next() {
        Some(Ok(Literal::Number(value))) => Some(Lexeme { value,
                                                          sign: leading_sign(rest),
                                                          end: cursor + lexer.span().end }),
        _ => None,
    }
}
