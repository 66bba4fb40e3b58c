use logos::Logos;

use crate::error::ScanError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the scanner.
/// This enum defines all recognized tokens in the language.
///
/// Several keywords (`function`, `for`, `while`, `foreach`, ...) are scanned
/// but not yet accepted by any grammar rule; they exist so programs using them
/// fail in the parser with a clear message rather than in the scanner.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = ScanErrorKind)]
pub enum Token {
    /// Floating-point literal tokens, such as `3.14` or `-2.`.
    ///
    /// A `-` directly followed by a digit is scanned as part of the literal;
    /// this is lexical negation, the language has no runtime unary minus.
    /// A second embedded dot makes the literal malformed.
    #[regex(r"-?[0-9]+\.[0-9]*", lex_real)]
    #[regex(r"-?[0-9]+\.[0-9]*\.[0-9.]*", malformed_number)]
    Real(f64),
    /// Integer literal tokens, such as `42` or `-7`.
    #[regex(r"-?[0-9]+", lex_integer)]
    Integer(i64),
    /// String literal tokens. No escape sequences, no embedded quotes.
    #[regex(r#""[^"]*""#, lex_string)]
    #[regex(r#""[^"]*"#, unterminated_string)]
    StrLiteral(String),
    /// Identifier tokens; variable names such as `x` or `$total`.
    #[regex(r"[A-Za-z_$][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `int`
    #[token("int")]
    Int,
    /// `float`
    #[token("float")]
    Float,
    /// `string`
    #[token("string")]
    Str,
    /// `bool`
    #[token("bool")]
    Bool,
    /// `void`
    #[token("void")]
    Void,
    /// `function`
    #[token("function")]
    Function,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `for`
    #[token("for")]
    For,
    /// `while`
    #[token("while")]
    While,
    /// `const`
    #[token("const")]
    Const,
    /// `import`
    #[token("import")]
    Import,
    /// `from`
    #[token("from")]
    From,
    /// `native`
    #[token("native")]
    Native,
    /// `return`
    #[token("return")]
    Return,
    /// `foreach`
    #[token("foreach")]
    Foreach,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `++`
    #[token("++")]
    PlusPlus,
    /// `--`
    #[token("--")]
    MinusMinus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`; a bare `!` is rejected because logical negation does not exist.
    #[token("!=")]
    #[token("!", bare_bang)]
    BangEqual,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// Line breaks: `\n` or `\r\n`. A bare `\r` is malformed.
    #[token("\n", newline)]
    #[token("\r\n", newline)]
    #[token("\r", bare_carriage_return)]
    Newline,
    /// Skipped input: ASCII spaces and `//` line comments. Tabs are not
    /// whitespace in this language.
    #[regex(r" +", logos::skip)]
    #[regex(r"//[^\n]*", logos::skip)]
    Ignored,
}

/// Additional information carried by the scanner during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Internal error classification produced inside `logos` callbacks.
///
/// Kinds carry no position; [`scan`] attaches the offending slice and line
/// when converting into a public [`ScanError`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// No token starts with the character at the current position.
    #[default]
    UnknownCharacter,
    /// `\r` without a following `\n`.
    MalformedLineEnding,
    /// String literal left open at end of input.
    UnterminatedString,
    /// Numeric literal with two dots, or one too large for `i64`.
    MalformedNumber,
    /// A bare `!`.
    UnsupportedOperator,
}

impl ScanErrorKind {
    /// Converts the kind into a public error carrying the offending text and
    /// source line.
    #[must_use]
    pub fn into_scan_error(self, slice: &str, line: usize) -> ScanError {
        match self {
            Self::UnknownCharacter => {
                ScanError::UnknownCharacter { ch: slice.chars().next().unwrap_or('\u{FFFD}'),
                                              line }
            },
            Self::MalformedLineEnding => ScanError::MalformedLineEnding { line },
            Self::UnterminatedString => ScanError::UnterminatedString { line },
            Self::MalformedNumber => ScanError::MalformedNumber { text: slice.to_string(),
                                                                  line },
            Self::UnsupportedOperator => ScanError::UnsupportedOperator { line },
        }
    }
}

/// Scans the whole source string into an ordered token sequence.
///
/// The scan is eager and total: it either consumes every character and
/// returns all tokens paired with the line they started on, or fails with the
/// first [`ScanError`]. Scanning the same string twice yields an identical
/// sequence.
///
/// # Errors
/// Returns a [`ScanError`] describing the first lexical failure, with its
/// line number.
///
/// # Examples
/// ```
/// use simpl::interpreter::lexer::{Token, scan};
///
/// let tokens = scan("int a = 2;").unwrap();
///
/// assert_eq!(tokens[0], (Token::Int, 1));
/// assert_eq!(tokens[1], (Token::Identifier("a".to_string()), 1));
/// assert_eq!(tokens[2], (Token::Equals, 1));
/// assert_eq!(tokens[3], (Token::Integer(2), 1));
/// assert_eq!(tokens[4], (Token::Semicolon, 1));
/// ```
pub fn scan(source: &str) -> Result<Vec<(Token, usize)>, ScanError> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    while let Some(next) = lexer.next() {
        match next {
            Ok(token) => tokens.push((token, lexer.extras.line)),
            Err(kind) => return Err(kind.into_scan_error(lexer.slice(), lexer.extras.line)),
        }
    }

    Ok(tokens)
}

/// Parses an integer literal from the current token slice.
///
/// Literals that do not fit an `i64` are reported as malformed.
fn lex_integer(lex: &logos::Lexer<Token>) -> Result<i64, ScanErrorKind> {
    lex.slice().parse().map_err(|_| ScanErrorKind::MalformedNumber)
}

/// Parses a floating-point literal from the current token slice.
fn lex_real(lex: &logos::Lexer<Token>) -> Result<f64, ScanErrorKind> {
    lex.slice().parse().map_err(|_| ScanErrorKind::MalformedNumber)
}

/// Strips the delimiting quotes from a scanned string literal.
///
/// Line breaks inside a string literal are not counted toward the line
/// number, matching the scanner's single-line bookkeeping elsewhere.
fn lex_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Rejects a string literal that reached end of input before its closing
/// quote.
fn unterminated_string(_: &mut logos::Lexer<Token>) -> Result<String, ScanErrorKind> {
    Err(ScanErrorKind::UnterminatedString)
}

/// Rejects a numeric literal containing a second embedded dot.
fn malformed_number(_: &mut logos::Lexer<Token>) -> Result<f64, ScanErrorKind> {
    Err(ScanErrorKind::MalformedNumber)
}

/// Advances the line counter and skips the line-break token.
fn newline(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    lex.extras.line += 1;
    logos::Skip
}

/// Rejects a carriage return that is not followed by a line feed.
fn bare_carriage_return(_: &mut logos::Lexer<Token>) -> Result<(), ScanErrorKind> {
    Err(ScanErrorKind::MalformedLineEnding)
}

/// Rejects a bare `!`; only `!=` is a supported operator.
fn bare_bang(_: &mut logos::Lexer<Token>) -> Result<(), ScanErrorKind> {
    Err(ScanErrorKind::UnsupportedOperator)
}
