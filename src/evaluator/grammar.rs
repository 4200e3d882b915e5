use crate::{error::ParseError, evaluator::cursor::Cursor, util::num::u64_to_f64_checked};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a sum and returns its value.
///
/// This is the top level of the precedence hierarchy and the entry point for
/// expression evaluation. It handles the left-associative binary operators
/// `+` and `-`, with `+` tried first at each step.
///
/// The rule is: `sum := product (("+" | "-") product)*`
///
/// # Parameters
/// - `cursor`: The scanning cursor, positioned at the start of the sum.
///
/// # Returns
/// The accumulated value of the sum.
pub fn parse_sum(cursor: &mut Cursor) -> ParseResult<f64> {
    let mut result = parse_product(cursor)?;
    while !cursor.at_end() {
        if cursor.maybe_expect('+') {
            result += parse_product(cursor)?;
        } else if cursor.maybe_expect('-') {
            result -= parse_product(cursor)?;
        } else {
            break;
        }
    }
    Ok(result)
}

/// Parses a product and returns its value.
///
/// Handles the left-associative binary operators `*` and `/`. Division is
/// plain IEEE-754 floating-point division; dividing by zero yields an
/// infinity or NaN rather than an error.
///
/// The rule is: `product := term (("*" | "/") term)*`
fn parse_product(cursor: &mut Cursor) -> ParseResult<f64> {
    let mut result = parse_term(cursor)?;
    while !cursor.at_end() {
        if cursor.maybe_expect('*') {
            result *= parse_term(cursor)?;
        } else if cursor.maybe_expect('/') {
            result /= parse_term(cursor)?;
        } else {
            break;
        }
    }
    Ok(result)
}

/// Parses a term, the atomic unit of the grammar.
///
/// A term is one of:
/// - a signed term: `-` (consumed preferentially) or `+` followed by another
///   term, recursing so that sign chains of any length work (`--5` is `5`);
///   the sub-result is negated iff the consumed sign was `-`
/// - an unsigned integer literal: one or more decimal digits
/// - a parenthesized sum: `(` sum `)`
///
/// The rule is: `term := ("-" | "+") term | digit+ | "(" sum ")"`
///
/// # Parameters
/// - `cursor`: The scanning cursor, positioned at the start of the term.
///
/// # Returns
/// The value of the term.
///
/// # Errors
/// - [`ParseError::UnexpectedEndOfInput`] if the input ends where a term is
///   required (for example after a trailing operator).
/// - [`ParseError::ExpectedChar`] if a parenthesized sum is missing its `)`.
/// - [`ParseError::UnexpectedChar`] if no alternative matches the current
///   character.
/// - Propagates any errors from sub-expression parsing.
fn parse_term(cursor: &mut Cursor) -> ParseResult<f64> {
    let ch = cursor.current()?;

    if ch == '-' || ch == '+' {
        let negative = cursor.maybe_expect('-');
        if !negative {
            cursor.maybe_expect('+');
        }

        let value = parse_term(cursor)?;
        Ok(if negative { -value } else { value })
    } else if ch.is_ascii_digit() {
        parse_literal(cursor)
    } else if cursor.maybe_expect('(') {
        let value = parse_sum(cursor)?;
        cursor.expect(')')?;
        Ok(value)
    } else {
        Err(ParseError::UnexpectedChar { found: ch })
    }
}

/// Parses an unsigned integer literal by greedily consuming digits.
///
/// The digits are consumed through the cursor, so whitespace between them is
/// transparent like everywhere else. The run is parsed as a `u64` and then
/// converted to `f64` only if exactly representable.
///
/// # Errors
/// Returns [`ParseError::LiteralTooLarge`] if the digit run does not fit in
/// a `u64` or exceeds the exactly-representable integer range of `f64`.
fn parse_literal(cursor: &mut Cursor) -> ParseResult<f64> {
    let position = cursor.position();

    let mut digits = String::new();
    while let Some(ch) = cursor.peek() {
        if !ch.is_ascii_digit() {
            break;
        }
        digits.push(ch);
        cursor.advance();
    }

    let value = digits
        .parse::<u64>()
        .map_err(|_| ParseError::LiteralTooLarge { position })?;
    u64_to_f64_checked(value, ParseError::LiteralTooLarge { position })
}
