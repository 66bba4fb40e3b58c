use crate::{
    ast::{BinaryOperator, ComparisonOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

/// Maps an equality-style operator and a boolean equality result to the final
/// boolean value.
///
/// Inverts the result for `NotEqual`. This function does not perform any
/// numeric work itself.
#[must_use]
pub const fn equality_op_result(op: ComparisonOperator, is_equal: bool) -> bool {
    match op {
        ComparisonOperator::Equal => is_equal,
        ComparisonOperator::NotEqual => !is_equal,
    }
}

impl Context {
    /// Evaluates a binary arithmetic operation.
    ///
    /// Two integer operands stay in integer arithmetic, where division
    /// truncates and all five operators are overflow-checked; a result
    /// outside the `i64` range (including `i64::MIN / -1`) is an
    /// [`RuntimeError::IntegerOverflow`]. As soon as either operand is a
    /// float, both are promoted and the operation runs in `f64`; `%` is the
    /// floating remainder there. Division and remainder by zero are checked
    /// explicitly for both numeric categories. Booleans take part in no
    /// arithmetic.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed number.
    ///
    /// # Example
    /// ```
    /// use simpl::{ast::BinaryOperator,
    ///             interpreter::{evaluator::core::Context, value::Value}};
    ///
    /// let x = Value::Integer(7);
    /// let y = Value::Integer(2);
    /// let line = 1;
    ///
    /// let result = Context::eval_arithmetic(BinaryOperator::Div, &x, &y, line).unwrap();
    /// assert_eq!(result, Value::Integer(3));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};
        use Value::{Bool, Integer};

        match (left, right) {
            (Bool(_), _) | (_, Bool(_)) => {
                Err(RuntimeError::TypeMismatch { details: format!("cannot apply '{op}' to a boolean"),
                                                 line })
            },

            (Integer(a), Integer(b)) => {
                let result = match op {
                    Add => a.checked_add(*b),
                    Sub => a.checked_sub(*b),
                    Mul => a.checked_mul(*b),
                    Div => {
                        if *b == 0 {
                            return Err(RuntimeError::DivisionByZero { line });
                        }
                        a.checked_div(*b)
                    },
                    Mod => {
                        if *b == 0 {
                            return Err(RuntimeError::DivisionByZero { line });
                        }
                        a.checked_rem(*b)
                    },
                };

                result.map(Integer)
                      .ok_or(RuntimeError::IntegerOverflow { line })
            },

            _ => {
                let left = left.as_real(line)?;
                let right = right.as_real(line)?;

                Ok(Value::Real(match op {
                                   Add => left + right,
                                   Sub => left - right,
                                   Mul => left * right,
                                   Div => {
                                       if right == 0.0 {
                                           return Err(RuntimeError::DivisionByZero { line });
                                       }
                                       left / right
                                   },
                                   Mod => {
                                       if right == 0.0 {
                                           return Err(RuntimeError::DivisionByZero { line });
                                       }
                                       left % right
                                   },
                               }))
            },
        }
    }

    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Integer pairs compare exactly; once a float is involved, both sides
    /// are promoted to `f64` first. Booleans compare only with booleans.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use simpl::{ast::ComparisonOperator,
    ///             interpreter::{evaluator::core::Context, value::Value}};
    ///
    /// let a = Value::Integer(3);
    /// let b = Value::Real(3.0);
    /// let line = 1;
    ///
    /// let result = Context::eval_comparison(ComparisonOperator::Equal, &a, &b, line);
    ///
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_comparison(op: ComparisonOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use Value::{Bool, Integer};

        match (left, right) {
            (Bool(a), Bool(b)) => Ok(Bool(equality_op_result(op, a == b))),

            (Bool(_), _) | (_, Bool(_)) => {
                Err(RuntimeError::TypeMismatch { details: "cannot compare a boolean with a number".to_string(),
                                                 line })
            },

            (Integer(a), Integer(b)) => Ok(Bool(equality_op_result(op, a == b))),

            _ => {
                let left = left.as_real(line)?;
                let right = right.as_real(line)?;

                Ok(Bool(equality_op_result(op, left == right)))
            },
        }
    }
}
