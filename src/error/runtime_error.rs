#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that has no runtime binding.
    ///
    /// The original implementation returned an undefined placeholder here;
    /// a lookup miss is now a hard error.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division or remainder by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer operation produced a result outside the 64-bit range.
    IntegerOverflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had a type the operation cannot work with.
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Variable '{name}' has no value at runtime.")
            },

            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),

            Self::IntegerOverflow { line } => {
                write!(f, "Error on line {line}: Integer operation overflowed.")
            },

            Self::TypeMismatch { details, line } => {
                write!(f, "Error on line {line}: Type mismatch: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
