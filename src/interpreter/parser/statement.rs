use std::iter::Peekable;

use tracing::trace;

use crate::{
    ast::{Expr, Statement},
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_identifier},
        },
    },
};

/// Parses a single statement.
/// A statement may be one of:
/// - the empty statement (nothing before the next separator, `}`, `else` or
///   the end of input), returned as `Ok(None)`.
/// - an `if`, `while` or `for` statement.
/// - a `{ ... }` block.
/// - an assignment `name <- expression` (or `name = expression`).
/// - an expression used as a statement.
///
/// An identifier starts an assignment only when the token after it is the
/// assignment operator; this is the one place the grammar looks two tokens
/// ahead.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// The parsed [`Statement`], or `None` for the empty statement.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, line)) = tokens.peek() else {
        return Ok(None);
    };
    let line = *line;

    let statement = match token {
        Token::Separator | Token::RBrace | Token::Else => return Ok(None),
        Token::If => {
            tokens.next();
            parse_if(tokens, line)?
        },
        Token::While => {
            tokens.next();
            parse_while(tokens, line)?
        },
        Token::For => {
            tokens.next();
            parse_for(tokens, line)?
        },
        Token::LBrace => {
            tokens.next();
            parse_block(tokens, line)?
        },
        Token::Identifier(_) if is_assignment(tokens) => parse_assignment(tokens, line)?,
        _ => Statement::Expression { expr: parse_expression(tokens)?,
                                     line },
    };

    trace!(line, "parsed statement");
    Ok(Some(statement))
}

/// Looks past the identifier at the front of `tokens` for `<-` / `=`.
fn is_assignment<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    lookahead.next();
    matches!(lookahead.peek(), Some((Token::Assign, _)))
}

/// Parses an assignment statement.
///
/// The form is `<identifier> <- <expression>`; `=` is accepted in place of
/// `<-`. The right-hand side is a full expression and may not itself be an
/// assignment.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the identifier.
/// - `line`: Line number of the identifier.
///
/// # Returns
/// A `Statement::Assignment`.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Assign, "'<-'", line)?;
    let value = parse_expression(tokens)?;

    Ok(Statement::Assignment { name, value, line })
}

/// Parses the parenthesized condition of `if` and `while`.
fn parse_condition<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::LParen, "'('", line)?;
    let condition = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "')'", line)?;
    Ok(condition)
}

/// Parses an `if` statement with an optional `else`.
///
/// Syntax:
/// ```text
///     if (<condition>) <statement>
///     if (<condition>) <statement> else <statement>
/// ```
/// An `else` binds to the nearest `if` that has none yet, so
/// `if (a) if (b) x else y` attaches `else y` to `if (b)`. The `else` must
/// follow the `then` statement on the same line; a newline in between ends
/// the `if`.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `line`: Line number of the `if` token.
///
/// # Returns
/// A `Statement::If` node.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_condition(tokens, line)?;
    let then_branch = parse_statement(tokens)?.map(Box::new);

    let else_branch = match tokens.peek() {
        Some((Token::Else, _)) => {
            tokens.next();
            parse_statement(tokens)?.map(Box::new)
        },
        _ => None,
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       line })
}

/// Parses a `while` statement.
///
/// Syntax: `while (<condition>) <statement>`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `while` keyword.
/// - `line`: Line number of the `while` token.
fn parse_while<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_condition(tokens, line)?;
    let body = parse_statement(tokens)?.map(Box::new);

    Ok(Statement::While { condition, body, line })
}

/// Parses a `for` statement.
///
/// Syntax: `for (<identifier> in <expression>) <statement>`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `for` keyword.
/// - `line`: Line number of the `for` token.
fn parse_for<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::LParen, "'('", line)?;
    let var = parse_identifier(tokens)?;
    expect_token(tokens, &Token::In, "'in'", line)?;
    let sequence = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "')'", line)?;
    let body = parse_statement(tokens)?.map(Box::new);

    Ok(Statement::For { var,
                        sequence,
                        body,
                        line })
}
