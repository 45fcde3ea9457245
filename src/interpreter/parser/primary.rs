use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated},
        },
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric and string literals
/// - identifiers
/// - builtin calls
/// - parenthesized expressions
///
/// There are no prefix operators; `-1` is a syntax error.
///
/// Grammar (simplified):
/// ```text
///     primary := NUMBER
///              | STRING
///              | IDENT
///              | IDENT "(" arguments ")"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, line) = tokens.next()
                              .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;
    let line = *line;

    match token {
        Token::Number(n) => Ok(Expr::Literal { value: (*n).into(),
                                               line }),
        Token::Str(s) => Ok(Expr::Literal { value: s.as_str().into(),
                                            line }),
        Token::Identifier(name) => parse_identifier_or_call(tokens, name, line),
        Token::LParen => parse_grouping(tokens, line),
        tok => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                 line }),
    }
}

/// Parses what follows an identifier: a call when `(` comes next, otherwise
/// a plain variable reference.
///
/// Grammar: `call := IDENT "(" (expression ("," expression)*)? ")"`
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>,
                                   name: &str,
                                   line: usize)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;

        return Ok(Expr::Call { name: name.to_string(),
                               arguments,
                               line });
    }

    Ok(Expr::Identifier { name: name.to_string(),
                          line })
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`; the opening parenthesis is already
/// consumed. The parentheses only group: the inner expression is returned
/// as-is with no wrapper node.
///
/// Grammar `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "')'", line)?;
    Ok(expr)
}
