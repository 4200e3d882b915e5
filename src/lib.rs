//! # tally
//!
//! tally is a small arithmetic expression evaluator written in Rust.
//! It parses and evaluates expressions built from integer literals, the four
//! basic operators `+ - * /`, unary signs, and parentheses, in a single pass
//! with no intermediate syntax tree: the value is accumulated while the
//! grammar is being matched.

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

use crate::{
    error::ParseError,
    evaluator::{cursor::Cursor, grammar::parse_sum},
};

/// Provides unified error types for scanning and parsing.
///
/// This module defines all errors that can be raised while an expression is
/// being parsed and evaluated. It standardizes error reporting and carries
/// detailed information about failures, including the offending character or
/// the position in the input where the failure occurred.
///
/// # Responsibilities
/// - Defines the error enum covering every failure mode of a parse.
/// - Attaches the expected/found character or input position for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the scanning and evaluation of one expression.
///
/// This module ties together the character cursor and the grammar descent
/// that together form the evaluation engine. The cursor owns the input text
/// and the scan position; the grammar functions drive the cursor through the
/// whole input in one pass and accumulate the numeric result as the
/// recursion unwinds.
///
/// # Responsibilities
/// - Coordinates the two core components: cursor and grammar.
/// - Exposes the scanning primitives and the grammar entry point.
/// - Manages the flow of data and errors between the two.
pub mod evaluator;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable conversion routines used by the evaluator.
/// These include safe conversions from integer to floating-point types that
/// never silently lose precision.
///
/// # Responsibilities
/// - Safely convert `u64` literals to `f64` without silent data loss.
pub mod util;

/// Evaluates one arithmetic expression and returns its value.
///
/// This function is the single entry point of the crate. It scans the whole
/// of `source` in one pass, driving the grammar down from sums through
/// products to terms, and returns the accumulated double-precision result.
/// An empty or all-whitespace input evaluates to `0.0`. Any input left over
/// after a complete expression is a syntax error.
///
/// Evaluation is stateless: nothing is shared between calls, and evaluating
/// the same input twice yields the same result.
///
/// # Errors
/// Returns a [`ParseError`] describing the first point at which the input
/// failed to match the grammar.
///
/// # Examples
/// ```
/// use tally::evaluate;
///
/// assert_eq!(evaluate("1+2*3").unwrap(), 7.0);
/// assert_eq!(evaluate("(1+2)*3").unwrap(), 9.0);
/// assert_eq!(evaluate("").unwrap(), 0.0);
///
/// // A stray operator with no operand is a syntax error.
/// assert!(evaluate("1+").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, ParseError> {
    let mut cursor = Cursor::new(source);

    if cursor.at_end() {
        return Ok(0.0);
    }

    let result = parse_sum(&mut cursor)?;
    cursor.expect_end()?;

    Ok(result)
}
