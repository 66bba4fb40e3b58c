use std::iter::Peekable;

use crate::{
    ast::{Statement, TypeTag},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            symbol::{SymbolInfo, SymbolTable},
        },
    },
};

/// Parses a whole program: a list of `;`-terminated statements.
///
/// This is the entry point for parsing. It owns the symbol table for the
/// parse, consumes the token sequence eagerly, and stops when the tokens are
/// exhausted; no end-of-input terminator exists, so a program must exactly
/// use up every token across its statements.
///
/// # Errors
/// Returns the first [`ParseError`] encountered; there is no statement-level
/// recovery and no partial AST.
///
/// # Examples
/// ```
/// use simpl::interpreter::{lexer::scan, parser::statement::parse_program};
///
/// let tokens = scan("int a = 2; return a * 3;").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Vec<Statement>> {
    let mut iter = tokens.iter().peekable();
    let mut symbols = SymbolTable::new();
    let mut statements = Vec::new();

    while iter.peek().is_some() {
        let statement = parse_statement(&mut iter, &mut symbols)?;

        match iter.next() {
            Some((Token::Semicolon, _)) => {},
            Some((_, line)) => return Err(ParseError::MissingSemicolon { line: *line }),
            None => {
                return Err(ParseError::MissingSemicolon { line: statement.line_number() });
            },
        }

        statements.push(statement);
    }

    Ok(statements)
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - a variable declaration (`[const] type name = expression`),
/// - a `return expression`,
/// - an `if` statement,
/// - an assignment (`name = expression`).
///
/// Assignment is only attempted when the identifier is directly followed by
/// `=`, using a one-token lookahead. The trailing `;` belongs to the caller.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
/// - `symbols`: Symbol table recording declarations seen so far.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                              symbols: &mut SymbolTable)
                              -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Const | Token::Int | Token::Float | Token::Str, _)) => {
            parse_variable_declaration(tokens, symbols)
        },

        Some((Token::Return, _)) => parse_return(tokens, symbols),

        Some((Token::If, _)) => parse_if(tokens, symbols),

        Some((Token::Identifier(_), _)) => {
            let mut lookahead = tokens.clone();
            lookahead.next();

            if let Some((Token::Equals, _)) = lookahead.peek() {
                return parse_assignment(tokens, symbols);
            }

            if let Some((tok, line)) = tokens.peek() {
                return Err(ParseError::MalformedStatement { message: format!("Not a valid statement beginning with {tok:?}."),
                                                            line:    *line, });
            }

            unreachable!()
        },

        Some((tok, line)) => {
            Err(ParseError::MalformedStatement { message: format!("Not a valid statement beginning with {tok:?}."),
                                                 line:    *line, })
        },

        None => {
            Err(ParseError::MalformedStatement { message: "Expected a statement but input ended.".to_string(),
                                                 line:    0, })
        },
    }
}

/// Parses a variable declaration: `[const] type name = expression`.
///
/// `const` must be directly followed by a type keyword. The declared name is
/// recorded in the symbol table only after its initializer has parsed, so the
/// initializer cannot reference the variable being declared
/// (`int a = a;` is an undeclared use).
///
/// # Errors
/// - `DuplicateDeclaration` when the name is already in the symbol table.
/// - `MalformedStatement` when the `const`/type/name/`=` shape is broken.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>,
                                     symbols: &mut SymbolTable)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut is_const = false;

    if let Some((Token::Const, const_line)) = tokens.peek() {
        let const_line = *const_line;
        tokens.next();

        match tokens.peek() {
            Some((tok, _)) if type_tag_for(tok).is_some() => {},
            Some((tok, line)) => {
                return Err(ParseError::MalformedStatement { message: format!("A 'const' declaration must name a type, found {tok:?}."),
                                                            line:    *line, });
            },
            None => {
                return Err(ParseError::MalformedStatement { message: "A 'const' declaration must name a type.".to_string(),
                                                            line:    const_line, });
            },
        }

        is_const = true;
    }

    let (declared_type, line) = match tokens.next() {
        Some((tok, line)) => match type_tag_for(tok) {
            Some(tag) => (tag, *line),
            None => {
                return Err(ParseError::MalformedStatement { message: format!("Expected a type name, found {tok:?}."),
                                                            line:    *line, });
            },
        },
        None => {
            return Err(ParseError::MalformedStatement { message: "Expected a type name but input ended.".to_string(),
                                                        line:    0, });
        },
    };

    let name = match tokens.next() {
        Some((Token::Identifier(name), _)) => name.clone(),
        Some((tok, line)) => {
            return Err(ParseError::MalformedStatement { message: format!("A type must be followed by a variable name, found {tok:?}."),
                                                        line:    *line, });
        },
        None => {
            return Err(ParseError::MalformedStatement { message: "A type must be followed by a variable name.".to_string(),
                                                        line, });
        },
    };

    if symbols.is_declared(&name) {
        return Err(ParseError::DuplicateDeclaration { name, line });
    }

    match tokens.next() {
        Some((Token::Equals, _)) => {},
        Some((tok, line)) => {
            return Err(ParseError::MalformedStatement { message: format!("A declaration must initialize its variable with '=', found {tok:?}."),
                                                        line:    *line, });
        },
        None => {
            return Err(ParseError::MalformedStatement { message: "A declaration must initialize its variable with '='.".to_string(),
                                                        line, });
        },
    }

    let value = parse_expression(tokens, symbols)?;

    symbols.declare(&name,
                    SymbolInfo { is_const,
                                 declared_type });

    Ok(Statement::VariableDeclaration { name,
                                        is_const,
                                        declared_type,
                                        value,
                                        line })
}

/// Parses an assignment statement: `name = expression`.
///
/// The caller has already established that the next two tokens are an
/// identifier and `=`. Declaration and constness are checked against the
/// symbol table before the right-hand side is parsed.
///
/// # Errors
/// - `AssignToUndeclared` when the name has no declaration.
/// - `AssignToConst` when the name was declared with `const`.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>,
                           symbols: &mut SymbolTable)
                           -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = if let Some((Token::Identifier(name), line)) = tokens.next() {
        (name.clone(), *line)
    } else {
        unreachable!()
    };

    tokens.next(); // '='

    match symbols.get(&name) {
        None => return Err(ParseError::AssignToUndeclared { name, line }),
        Some(info) if info.is_const => return Err(ParseError::AssignToConst { name, line }),
        Some(_) => {},
    }

    let value = parse_expression(tokens, symbols)?;

    Ok(Statement::Assignment { name, value, line })
}

/// Parses a conditional statement:
/// `if ( expression ) statement [; else statement]`.
///
/// The `;` after the then-branch is peeked at but not consumed here; an
/// `else` is recognized only as the token directly following that `;`. When
/// there is no else-branch, the caller consumes the semicolon; when there is
/// one, this function consumes `;` and `else` and the caller consumes the
/// else-branch's own semicolon.
///
/// # Errors
/// - `MalformedStatement` when `(` is missing after `if`.
/// - `UnbalancedParens` when the condition's `)` is missing.
/// - `MissingSemicolon` when the then-branch is not followed by `;`.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, symbols: &mut SymbolTable) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = if let Some((Token::If, line)) = tokens.next() {
        *line
    } else {
        unreachable!()
    };

    match tokens.next() {
        Some((Token::LParen, _)) => {},
        Some((tok, line)) => {
            return Err(ParseError::MalformedStatement { message: format!("An 'if' condition must start with '(', found {tok:?}."),
                                                        line:    *line, });
        },
        None => {
            return Err(ParseError::MalformedStatement { message: "An 'if' condition must start with '('.".to_string(),
                                                        line, });
        },
    }

    let condition = parse_expression(tokens, symbols)?;

    match tokens.next() {
        Some((Token::RParen, _)) => {},
        _ => return Err(ParseError::UnbalancedParens { line }),
    }

    let then_branch = parse_statement(tokens, symbols)?;

    match tokens.peek() {
        Some((Token::Semicolon, _)) => {},
        Some((_, line)) => return Err(ParseError::MissingSemicolon { line: *line }),
        None => {
            return Err(ParseError::MissingSemicolon { line: then_branch.line_number() });
        },
    }

    let mut lookahead = tokens.clone();
    lookahead.next();

    let else_branch = if let Some((Token::Else, _)) = lookahead.peek() {
        tokens.next(); // ';'
        tokens.next(); // 'else'

        Some(Box::new(parse_statement(tokens, symbols)?))
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_branch: Box::new(then_branch),
                       else_branch,
                       line })
}

/// Parses a `return expression` statement.
fn parse_return<'a, I>(tokens: &mut Peekable<I>,
                       symbols: &mut SymbolTable)
                       -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = if let Some((Token::Return, line)) = tokens.next() {
        *line
    } else {
        unreachable!()
    };

    let expr = parse_expression(tokens, symbols)?;

    Ok(Statement::Return { expr, line })
}

/// Maps a type keyword token to its [`TypeTag`].
///
/// `bool` and `void` keywords exist in the token model but are not valid
/// declaration types.
#[must_use]
pub const fn type_tag_for(token: &Token) -> Option<TypeTag> {
    match token {
        Token::Int => Some(TypeTag::Int),
        Token::Float => Some(TypeTag::Float),
        Token::Str => Some(TypeTag::Str),
        _ => None,
    }
}
