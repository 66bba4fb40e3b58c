use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, ComparisonOperator, Expr},
    error::ParseError,
    interpreter::{lexer::Token, parser::symbol::SymbolTable},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, equality, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := equality`
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
/// - `symbols`: Symbol table used to validate variable references.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               symbols: &SymbolTable)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_equality(tokens, symbols)
}

/// Parses equality comparisons (`==`, `!=`).
///
/// The rule is: `equality := additive (("==" | "!=") equality)?`
///
/// The right-hand side recurses into this same level instead of looping, so
/// chains of equality operators associate right to left. The same holds for
/// every precedence level below; `1 - 2 - 3` parses as `1 - (2 - 3)`.
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `symbols`: Symbol table used to validate variable references.
///
/// # Returns
/// An `Expr::Comparison` node, or the plain additive expression when no
/// comparison operator follows.
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>, symbols: &SymbolTable) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_additive(tokens, symbols)?;

    if let Some((token, line)) = tokens.peek()
       && let Some(op) = token_to_comparison_operator(token)
    {
        let line = *line;
        tokens.next();

        let right = parse_equality(tokens, symbols)?;

        return Ok(Expr::Comparison { left: Box::new(left),
                                     op,
                                     right: Box::new(right),
                                     line });
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") additive)?`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `symbols`: Symbol table used to validate variable references.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, symbols: &SymbolTable) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_multiplicative(tokens, symbols)?;

    if let Some((token, line)) = tokens.peek()
       && let Some(op) = token_to_binary_operator(token)
       && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        let line = *line;
        tokens.next();

        let right = parse_additive(tokens, symbols)?;

        return Ok(Expr::BinaryOp { left: Box::new(left),
                                   op,
                                   right: Box::new(right),
                                   line });
    }

    Ok(left)
}

/// Parses multiplication-level expressions (`*`, `/`, `%`).
///
/// The rule is: `multiplicative := primary (("*" | "/" | "%") multiplicative)?`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `symbols`: Symbol table used to validate variable references.
///
/// # Returns
/// A binary expression tree combining primary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   symbols: &SymbolTable)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_primary(tokens, symbols)?;

    if let Some((token, line)) = tokens.peek()
       && let Some(op) = token_to_binary_operator(token)
       && matches!(op,
                   BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
    {
        let line = *line;
        tokens.next();

        let right = parse_multiplicative(tokens, symbols)?;

        return Ok(Expr::BinaryOp { left: Box::new(left),
                                   op,
                                   right: Box::new(right),
                                   line });
    }

    Ok(left)
}

/// Parses the highest-precedence level: literals, variable references, and
/// parenthesized expressions.
///
/// Grammar: `primary := INTEGER | FLOAT | IDENTIFIER | "(" expression ")"`
///
/// A referenced identifier must already be declared in the symbol table.
/// String literals are scanned but no expression rule accepts them, so they
/// fail here like any other unexpected token.
///
/// # Errors
/// - `UndeclaredVariableUse` for identifiers missing from the symbol table.
/// - `UnbalancedParens` when a `(` is not closed.
/// - `MalformedStatement` for any other token, or when input ends.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>, symbols: &SymbolTable) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::LParen, line)) => {
            let expr = parse_expression(tokens, symbols)?;

            match tokens.next() {
                Some((Token::RParen, _)) => Ok(expr),
                _ => Err(ParseError::UnbalancedParens { line: *line }),
            }
        },

        Some((Token::Integer(value), line)) => Ok(Expr::Literal { value: (*value).into(),
                                                                  line:  *line, }),

        Some((Token::Real(value), line)) => Ok(Expr::Literal { value: (*value).into(),
                                                               line:  *line, }),

        Some((Token::Identifier(name), line)) => {
            if !symbols.is_declared(name) {
                return Err(ParseError::UndeclaredVariableUse { name: name.clone(),
                                                               line: *line, });
            }

            Ok(Expr::Variable { name: name.clone(),
                                line: *line, })
        },

        Some((tok, line)) => {
            Err(ParseError::MalformedStatement { message: format!("Expected an integer, a float, a variable, or '(', found {tok:?}."),
                                                 line:    *line, })
        },

        None => {
            Err(ParseError::MalformedStatement { message: "Expected an expression but input ended.".to_string(),
                                                 line:    0, })
        },
    }
}

/// Maps a token to its corresponding arithmetic operator.
///
/// # Example
/// ```
/// use simpl::{ast::BinaryOperator,
///             interpreter::{lexer::Token, parser::core::token_to_binary_operator}};
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Semicolon), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        _ => None,
    }
}

/// Maps a token to its corresponding comparison operator.
#[must_use]
pub const fn token_to_comparison_operator(token: &Token) -> Option<ComparisonOperator> {
    match token {
        Token::EqualEqual => Some(ComparisonOperator::Equal),
        Token::BangEqual => Some(ComparisonOperator::NotEqual),
        _ => None,
    }
}
