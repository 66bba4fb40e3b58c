use std::collections::HashMap;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::value::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: a single flat mapping from
/// variable name to current value. There are no nested scopes and no stack
/// frames; the language has no functions and no block scoping. One `Context`
/// is exclusively owned by one interpretation run and must not be reused
/// across programs.
pub struct Context {
    variables: HashMap<String, Value>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with an empty variable environment.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new() }
    }

    /// Evaluates a whole program in order against this context.
    ///
    /// The result is the value yielded by the last executed statement, which
    /// is not necessarily a `return`: declarations and assignments yield the
    /// bound value, and an `if` whose branch was not taken yields nothing.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised; execution stops
    /// immediately, leaving no partial result.
    pub fn eval_program(&mut self, statements: &[Statement]) -> EvalResult<Option<Value>> {
        let mut result = None;

        for statement in statements {
            result = self.eval_statement(statement)?;
        }

        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// Declarations bind their initializer's value unconditionally (the
    /// parser already guarantees the name is fresh). Assignments re-check at
    /// runtime that the name is bound before rebinding it.
    ///
    /// # Returns
    /// `Some(Value)` for statements that yield a result, or `None` when no
    /// value is produced.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::VariableDeclaration { name, value, .. } => {
                let value = self.eval(value)?;

                self.define(name, value);
                Ok(Some(value))
            },

            Statement::Assignment { name, value, line } => {
                if self.get_variable(name).is_none() {
                    return Err(RuntimeError::UndefinedVariable { name: name.clone(),
                                                                 line: *line, });
                }

                let value = self.eval(value)?;

                self.define(name, value);
                Ok(Some(value))
            },

            Statement::Return { expr, .. } => Ok(Some(self.eval(expr)?)),

            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.eval(condition)?.is_truthy() {
                    self.eval_statement(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.eval_statement(else_branch)
                } else {
                    Ok(None)
                }
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Expressions never mutate the environment; only statements do.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok((*value).into()),

            Expr::Variable { name, line } => self.eval_variable(name, *line),

            Expr::BinaryOp { left, op, right, line } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;

                Self::eval_arithmetic(*op, &left, &right, *line)
            },

            Expr::Comparison { left, op, right, line } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;

                Self::eval_comparison(*op, &left, &right, *line)
            },
        }
    }

    /// Looks up a variable's current value.
    ///
    /// A miss is a hard [`RuntimeError::UndefinedVariable`]; the evaluator
    /// never substitutes a placeholder for an unbound name.
    fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.get_variable(name)
            .copied()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }

    /// Gets the current binding for `name`, if any.
    ///
    /// # Example
    /// ```
    /// use simpl::interpreter::{evaluator::core::Context, value::Value};
    ///
    /// let mut context = Context::new();
    /// context.define("x", Value::Integer(5));
    ///
    /// assert_eq!(context.get_variable("x"), Some(&Value::Integer(5)));
    /// assert_eq!(context.get_variable("y"), None);
    /// ```
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, overwriting any previous binding.
    pub fn define(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Consumes the context, returning the final variable environment for
    /// inspection by the caller.
    #[must_use]
    pub fn into_variables(self) -> HashMap<String, Value> {
        self.variables
    }
}
