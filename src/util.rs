/// Numeric conversion helpers.
///
/// This module provides safe conversion from integers to floating-point
/// values without risking silent data loss or rounding errors. Use these
/// helpers whenever an `i64` is promoted to `f64` during mixed-type
/// arithmetic or comparison.
pub mod num;
