use tracing::debug;

use crate::{error::Result, interpreter::tokenizer::Tokenizer};

/// Evaluates one flat arithmetic expression.
///
/// The input is tokenized into nested scopes, each group being collapsed to a
/// number as soon as its `)` is read, and the remaining outermost scope is
/// reduced to the final value. Empty input evaluates to `0.0`.
///
/// Division by zero is not an error; infinities and NaN propagate through
/// the rest of the expression.
///
/// # Errors
/// Returns an error if the parentheses are unbalanced, an operator is missing
/// an operand, or an unsupported symbol is used as an operator.
///
/// # Example
/// ```
/// use calc::interpreter::evaluator::evaluate;
///
/// assert_eq!(evaluate("((1+2)*(3+4))"), Ok(21.0));
/// assert_eq!(evaluate("2 ^ 3 ^ 2"), Ok(64.0));
/// assert_eq!(evaluate(""), Ok(0.0));
/// assert!(evaluate("0/0").unwrap().is_nan());
/// ```
pub fn evaluate(source: &str) -> Result<f64> {
    debug!(source, "evaluating");
    let value = Tokenizer::new(source).tokenize()?.finish()?;
    debug!(value, "evaluated");
    Ok(value)
}
