/// Expression parsing.
///
/// Implements the precedence hierarchy as recursive-descent levels: primary →
/// multiplicative → additive → equality. Each level recurses into itself on
/// the right-hand side, so same-precedence chains associate right to left;
/// this mirrors the language's reference behavior and is deliberate.
pub mod core;
/// Statement parsing.
///
/// Implements the statement grammar (declarations, assignments, `return`,
/// `if`/`else`) and the top-level loop that requires a `;` after every
/// statement.
pub mod statement;
/// The parse-time symbol table.
///
/// Tracks declared names with their constness and declared type, for the
/// duration of one parse only.
pub mod symbol;
