use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::token::{Token, TokenSequence, is_supported},
};

/// Result type used by the reducer.
///
/// Reduction either yields a value of type `T` or a `RuntimeError`
/// describing why the scope could not be collapsed.
pub type ReduceResult<T> = Result<T, RuntimeError>;

/// Precedence tiers, highest first. Each tier is reduced completely, left to
/// right, before the next one starts.
pub const TIERS: [&[char]; 3] = [&['^'], &['*', '/'], &['+', '-']];

/// Applies a binary operator to two operands.
///
/// Division follows IEEE-754 semantics: dividing by zero yields an infinity
/// or NaN rather than an error.
///
/// # Parameters
/// - `op`: A canonical operator symbol.
/// - `a`: Left operand.
/// - `b`: Right operand.
///
/// # Returns
/// The result of `a op b`, or `RuntimeError::UnsupportedOperator` if `op`
/// is not one of `^`, `*`, `/`, `+`, `-`.
///
/// # Example
/// ```
/// use calc::{error::RuntimeError, interpreter::reducer::apply};
///
/// assert_eq!(apply('^', 2.0, 10.0), Ok(1024.0));
/// assert_eq!(apply('/', 1.0, 0.0), Ok(f64::INFINITY));
/// assert_eq!(apply('%', 1.0, 2.0),
///            Err(RuntimeError::UnsupportedOperator { operator: '%' }));
/// ```
pub fn apply(op: char, a: f64, b: f64) -> ReduceResult<f64> {
    match op {
        '^' => Ok(a.powf(b)),
        '*' => Ok(a * b),
        '/' => Ok(a / b),
        '+' => Ok(a + b),
        '-' => Ok(a - b),
        _ => Err(RuntimeError::UnsupportedOperator { operator: op }),
    }
}

/// Collapses a scope's tokens into a single value.
///
/// Every tier of [`TIERS`] is reduced in turn. Within a tier the first
/// matching operator is folded together with its two neighbours into one
/// number, and scanning resumes at the same position. Operators of one tier
/// therefore associate to the left, `^` included.
///
/// On success the sequence is left holding the single result, so reducing
/// it again is a no-op. An empty sequence reduces to `0.0`.
///
/// # Errors
/// - `UnsupportedOperator` if the scope contains a symbol that is not an
///   operator.
/// - `SyntaxError` if an operator is missing an operand, or if values are
///   left without an operator between them.
///
/// # Example
/// ```
/// use calc::interpreter::{
///     reducer::reduce,
///     token::{Token, TokenSequence},
/// };
///
/// let mut tokens: TokenSequence = [Token::Number(2.0),
///                                  Token::Operator('+'),
///                                  Token::Number(3.0),
///                                  Token::Operator('*'),
///                                  Token::Number(4.0)].into_iter()
///                                                     .collect();
/// assert_eq!(reduce(&mut tokens), Ok(14.0));
/// assert_eq!(tokens.as_slice(), &[Token::Number(14.0)]);
/// assert_eq!(reduce(&mut tokens), Ok(14.0));
/// ```
pub fn reduce(tokens: &mut TokenSequence) -> ReduceResult<f64> {
    if let Some(operator) = tokens.iter().filter_map(Token::symbol).find(|&c| !is_supported(c)) {
        return Err(RuntimeError::UnsupportedOperator { operator });
    }

    for tier in TIERS {
        reduce_tier(tokens, tier)?;
    }

    match tokens.as_slice() {
        [] => Ok(0.0),
        [Token::Number(value)] => Ok(*value),
        _ => Err(RuntimeError::SyntaxError { operator: None }),
    }
}

fn reduce_tier(tokens: &mut TokenSequence, tier: &[char]) -> ReduceResult<()> {
    let mut i = 0;

    while i < tokens.len() {
        let Some(op) = tokens.get(i).and_then(Token::symbol).filter(|c| tier.contains(c)) else {
            i += 1;
            continue;
        };

        let left = i.checked_sub(1).and_then(|j| tokens.get(j)).and_then(Token::number);
        let right = tokens.get(i + 1).and_then(Token::number);
        let (Some(a), Some(b)) = (left, right) else {
            return Err(RuntimeError::SyntaxError { operator: Some(op) });
        };

        let value = apply(op, a, b)?;
        trace!("{a} {op} {b} = {value}");
        tokens.splice_triple(i - 1, value);
    }

    Ok(())
}
