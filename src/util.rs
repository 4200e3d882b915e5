/// Numeric conversion helpers.
///
/// This module provides safe functions for converting integer literals to
/// floating-point values without risking silent data loss or rounding
/// errors. Use these helpers whenever a `u64` needs to become an `f64` in a
/// way that guarantees correctness.
///
/// All functions return a `Result`, which is `Ok` if the conversion is
/// lossless and valid, or an error if the value is out of range.
pub mod num;
