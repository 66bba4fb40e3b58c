#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning source text.
pub enum ScanError {
    /// A carriage return was not followed by a line feed.
    MalformedLineEnding {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal was still open when the input ended.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric literal could not be scanned, e.g. `1.2.3`.
    MalformedNumber {
        /// The offending literal text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator character was recognized but is not supported: a bare `!`
    /// that does not form `!=`.
    UnsupportedOperator {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A character that no token begins with.
    UnknownCharacter {
        /// The character encountered.
        ch:   char,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedLineEnding { line } => write!(f,
                                                         "Error on line {line}: Carriage return must be followed by a line feed."),

            Self::UnterminatedString { line } => write!(f,
                                                        "Error on line {line}: String literal is missing its closing '\"'."),

            Self::MalformedNumber { text, line } => {
                write!(f, "Error on line {line}: Malformed numeric literal '{text}'.")
            },

            Self::UnsupportedOperator { line } => {
                write!(f, "Error on line {line}: Bare '!' is not supported; only '!=' is.")
            },

            Self::UnknownCharacter { ch, line } => {
                write!(f, "Error on line {line}: Unknown character {ch:?}.")
            },
        }
    }
}

impl std::error::Error for ScanError {}
