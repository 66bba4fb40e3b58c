/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and comparison operations, manages variable state, and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes with an exhaustive match over every variant.
/// - Maintains the flat runtime variable environment.
/// - Reports runtime errors such as division by zero or unbound variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces the full
/// token sequence in one eager pass, each token corresponding to a meaningful
/// language element such as a number, identifier, operator, delimiter, or
/// keyword. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source line info.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer in a single
/// recursive-descent pass and constructs an AST representing the program's
/// statements and expressions. Declaration rules are validated here, at parse
/// time, against a symbol table that lives only for the duration of the
/// parse.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar and declaration rules, reporting errors with location
///   info.
/// - Owns the parse-time symbol table; nothing of it escapes the parse.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during execution: integers,
/// floating-point numbers, and the booleans produced by comparisons. It also
/// provides safe promotion from integer to real and truthiness for `if`
/// conditions.
pub mod value;
