use std::f64::consts;

use crate::interpreter::lexer::{Lexeme, leading_sign};

/// Longest constant name, in characters.
pub const MAX_CONST_LEN: usize = 3;

/// A named constant that may appear in place of a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant {
    pub name:           &'static str,
    pub value:          f64,
    pub case_sensitive: bool,
}

impl Constant {
    fn accepts(&self, index: usize, c: char) -> bool {
        match self.name.chars().nth(index) {
            Some(expected) if self.case_sensitive => expected == c,
            Some(expected) => expected.eq_ignore_ascii_case(&c),
            None => false,
        }
    }

    fn char_len(&self) -> usize {
        self.name.chars().count()
    }
}

const CONSTANT_COUNT: usize = 3;

/// Every constant the lexer knows.
pub static CONSTANTS: [Constant; CONSTANT_COUNT] =
    [Constant { name:           "e",
                value:          consts::E,
                case_sensitive: true, },
     Constant { name:           "pi",
                value:          consts::PI,
                case_sensitive: false, },
     Constant { name:           "phi",
                value:          1.618_033_988_749_895,
                case_sensitive: false, }];

/// Recognizes a named constant at `cursor`.
///
/// Leading whitespace is skipped, then an optional `+` or `-`. All constants
/// are matched in parallel one character at a time; a candidate drops out at
/// its first mismatching character and the longest complete name wins.
///
/// `e` is case sensitive, `pi` and `phi` are not.
///
/// # Parameters
/// - `source`: The full input.
/// - `cursor`: Byte offset to start at.
///
/// # Returns
/// - `Some(Lexeme)` with the (possibly negated) value and the offset just past
///   the name.
/// - `None` if no constant starts at `cursor`.
///
/// # Example
/// ```
/// use calc::interpreter::lexer::lex_constant;
///
/// assert_eq!(lex_constant("PI", 0).unwrap().value, std::f64::consts::PI);
/// assert_eq!(lex_constant("  -e", 0).unwrap().value, -std::f64::consts::E);
/// assert!(lex_constant("E", 0).is_none());
/// ```
#[must_use]
pub fn lex_constant(source: &str, cursor: usize) -> Option<Lexeme> {
    let rest = source.get(cursor..)?;
    let trimmed = rest.trim_start();
    let sign = leading_sign(trimmed);
    let name_start = cursor + (rest.len() - trimmed.len()) + sign.map_or(0, char::len_utf8);

    // Characters of each candidate matched so far.
    let mut progress = [0_usize; CONSTANT_COUNT];
    let mut best: Option<(f64, usize)> = None;

    for (i, (offset, c)) in source[name_start..].char_indices().take(MAX_CONST_LEN).enumerate() {
        let mut alive = false;

        for (constant, matched) in CONSTANTS.iter().zip(progress.iter_mut()) {
            if *matched != i || !constant.accepts(i, c) {
                continue;
            }
            *matched += 1;
            alive = true;
            if *matched == constant.char_len() {
                best = Some((constant.value, name_start + offset + c.len_utf8()));
            }
        }

        if !alive {
            break;
        }
    }

    best.map(|(value, end)| Lexeme { value: if sign == Some('-') { -value } else { value },
                                     sign,
                                     end })
}
