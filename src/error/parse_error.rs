#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token sequence.
pub enum ParseError {
    /// A statement was not followed by a `;` token.
    MissingSemicolon {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An identifier was referenced inside an expression before being
    /// declared.
    UndeclaredVariableUse {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A variable name was declared a second time.
    DuplicateDeclaration {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to assign to a variable declared with `const`.
    AssignToConst {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to assign to a variable that was never declared.
    AssignToUndeclared {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A token sequence that does not form any valid statement or expression.
    MalformedStatement {
        /// Details about what was expected.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A `(` was never matched by a `)`.
    UnbalancedParens {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSemicolon { line } => {
                write!(f, "Error on line {line}: Missing semicolon after statement.")
            },

            Self::UndeclaredVariableUse { name, line } => {
                write!(f, "Error on line {line}: Variable '{name}' was used but not declared yet.")
            },

            Self::DuplicateDeclaration { name, line } => write!(f,
                                                                "Error on line {line}: Variable '{name}' is already declared and cannot be redeclared."),

            Self::AssignToConst { name, line } => {
                write!(f, "Error on line {line}: Cannot reassign constant variable '{name}'.")
            },

            Self::AssignToUndeclared { name, line } => write!(f,
                                                              "Error on line {line}: Cannot assign to variable '{name}' before it is declared."),

            Self::MalformedStatement { message, line } => {
                write!(f, "Error on line {line}: {message}")
            },

            Self::UnbalancedParens { line } => {
                write!(f, "Error on line {line}: Missing ')' to close expression.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
