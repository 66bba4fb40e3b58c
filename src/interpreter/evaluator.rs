/// Binary operations.
///
/// Arithmetic and comparison evaluation over runtime values, including
/// integer/real promotion and division-by-zero checks.
pub mod binary;
/// The evaluation context and the statement/expression walkers.
pub mod core;
