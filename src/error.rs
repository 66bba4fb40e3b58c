/// Parsing errors.
///
/// Defines all error types that can occur while turning a token sequence into
/// an AST. Parse errors include missing semicolons, unbalanced parentheses,
/// declaration rule violations, and malformed statements.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero, type mismatches, or reads of unbound variables.
pub mod runtime_error;
/// Scanning errors.
///
/// Defines all error types that can occur while turning raw source text into
/// tokens: malformed numbers and line endings, unterminated strings,
/// unsupported operators, and unknown characters.
pub mod scan_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use scan_error::ScanError;

#[derive(Debug, Clone, PartialEq)]
/// Any failure the pipeline can produce, one variant per phase.
///
/// Every phase aborts the whole run on its first error; there is no recovery
/// and no partial result. The `From` impls let drivers thread all three
/// phases through `?`.
pub enum Error {
    /// The scanner rejected the source text.
    Scan(ScanError),
    /// The parser rejected the token sequence.
    Parse(ParseError),
    /// The evaluator rejected the program at runtime.
    Runtime(RuntimeError),
}

impl From<ScanError> for Error {
    fn from(e: ScanError) -> Self {
        Self::Scan(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scan(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Scan(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
