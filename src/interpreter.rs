/// The evaluator module ties the other phases together.
///
/// It tokenizes the input into nested scopes, collapsing every group as soon
/// as it closes, then reduces what is left at the outermost level to the
/// final value.
pub mod evaluator;
/// The lexer module recognizes values at a cursor position.
///
/// Numeric literals and named constants are recognized here. Both lexers are
/// pure functions of the input and the cursor; neither keeps state between
/// calls.
///
/// # Responsibilities
/// - Parses signed floating-point literals with optional fraction and
///   exponent.
/// - Matches the constants `e`, `pi` and `phi`, honoring case rules.
/// - Reports the end of the matched span and any leading sign.
pub mod lexer;
/// The reducer module collapses a scope's tokens into a single value.
///
/// # Responsibilities
/// - Folds `number operator number` triples in precedence tiers: `^`, then
///   `*` and `/`, then `+` and `-`.
/// - Applies the arithmetic of each operator.
/// - Rejects operators missing an operand and unsupported symbols.
pub mod reducer;
/// Nested parenthesized groups.
pub mod scope;
/// Token and token sequence types shared by every phase.
pub mod token;
/// The tokenizer drives the cursor over the whole input.
///
/// It consults the lexers for values, turns everything else into operator
/// tokens, and opens and closes scopes on parentheses.
pub mod tokenizer;
