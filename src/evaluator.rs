/// The cursor module scans the characters of one expression.
///
/// The cursor owns the input text and a scan position that only ever moves
/// forward. Whitespace is transparent: construction and every advance land
/// the position on the next significant character, and trailing whitespace
/// counts as end of input. Single-character lookahead with atomic
/// peek-and-consume is all the grammar needs, so no backtracking primitive
/// exists.
///
/// # Responsibilities
/// - Owns the input buffer and the scan position for one evaluation.
/// - Provides lookahead, conditional and unconditional consumption of an
///   expected character, and end-of-input detection.
/// - Reports mismatches as parse errors at the point of failure.
pub mod cursor;
/// The grammar module evaluates expressions by recursive descent.
///
/// The three grammar levels (sum, product, term) are mutually recursive
/// functions that drive the cursor through the input and compute the value
/// directly as the recursion unwinds. No syntax tree is ever built; the call
/// stack is the only state, bounded by the nesting depth of the input.
///
/// # Responsibilities
/// - Implements the precedence hierarchy: `*`/`/` bind tighter than `+`/`-`,
///   same-precedence operators are left-associative.
/// - Handles unary sign chains and parenthesized subexpressions.
/// - Converts digit runs to numeric values without overflow surprises.
pub mod grammar;
