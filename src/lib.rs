//! # simpl
//!
//! simpl is a small typed expression language interpreter written in Rust.
//! It scans, parses, and evaluates programs made of typed variable
//! declarations, assignments, conditionals, and `return` statements, with
//! integer and floating-point arithmetic.
//!
//! The pipeline is strictly lex → parse → interpret: the scanner eagerly
//! produces the full token sequence, the parser eagerly builds the full AST
//! while enforcing declaration rules, and the evaluator walks the AST once
//! against a flat variable environment. Every run is deterministic, pure, and
//! isolated; no state leaks between runs.

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
)]
#![allow(clippy::missing_errors_doc)]

use std::collections::HashMap;

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Context, lexer::scan, parser::statement::parse_program, value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
/// - Keeps the node set closed so evaluation is exhaustively matched.
pub mod ast;
/// Provides unified error types for scanning, parsing, and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// source lines for debugging and user feedback.
///
/// # Responsibilities
/// - Defines one error enum per phase, plus a pipeline-level sum type.
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and error handling to provide a complete runtime for
/// source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Provides entry points for each phase individually.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert `i64` to `f64` without silent data loss.
pub mod util;

/// The observable result of running one program.
///
/// Carries the value of the last executed statement together with the final
/// state of every declared variable, for inspection by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The value yielded by the last executed statement, if it produced one.
    pub value:     Option<Value>,
    /// The final runtime environment.
    pub variables: HashMap<String, Value>,
}

/// Runs a whole program and returns its outcome.
///
/// The source is scanned, parsed, and evaluated in one shot. Each call uses a
/// fresh scanner, a fresh parse-time symbol table, and a fresh evaluation
/// context, so independent programs cannot influence each other.
///
/// # Errors
/// Returns an [`Error`] wrapping the first scan, parse, or runtime failure.
/// Any error aborts the whole pipeline; there is no partial result.
///
/// # Examples
/// ```
/// use simpl::{interpreter::value::Value, run_source};
///
/// let outcome = run_source("int a = 2; const int b = 2; return (a + b) * 3;").unwrap();
///
/// assert_eq!(outcome.value, Some(Value::Integer(12)));
/// assert_eq!(outcome.variables.get("a"), Some(&Value::Integer(2)));
///
/// // 'b' is const: reassigning it is rejected before evaluation begins.
/// assert!(run_source("const int b = 2; b = 3;").is_err());
/// ```
pub fn run_source(source: &str) -> Result<Outcome, Error> {
    let tokens = scan(source)?;
    let statements = parse_program(&tokens)?;

    let mut context = Context::new();
    let value = context.eval_program(&statements)?;

    Ok(Outcome { value,
                 variables: context.into_variables(), })
}
