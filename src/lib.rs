//! # calc
//!
//! calc is a command line calculator written in Rust.
//! It evaluates one flat arithmetic expression of numbers, the constants
//! `e`, `pi` and `phi`, the operators `^ * / + -` and nested parentheses.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error types of an evaluation.
///
/// Every failure aborts the evaluation of the whole expression and is
/// reported as a distinct error value; the library never panics or exits the
/// process on malformed input.
///
/// # Responsibilities
/// - Defines grouping errors (unbalanced parentheses) with source offsets.
/// - Defines reduction errors (missing operands, unsupported operators).
/// - Integrates with `std::error::Error` and `?` propagation.
pub mod error;
/// Implements the evaluation engine.
///
/// This module contains every phase of an evaluation: the lexers for numbers
/// and constants, the tokenizer, the scope stack for parenthesized groups, the
/// precedence-ordered reducer and the orchestrating evaluator.
pub mod interpreter;
/// General utilities that are not part of the evaluation itself.
pub mod util;

pub use error::{Error, Result};
pub use interpreter::evaluator::evaluate;
