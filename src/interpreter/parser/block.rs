use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement, utils::expect_token},
    },
};

/// Parses statements separated by newlines.
///
/// Each position between separators holds one statement, which may be empty;
/// empty statements are dropped. After a statement the next token must be a
/// separator, the `closing` token (left unconsumed), or the end of input when
/// `closing` is `None`.
///
/// Grammar: `statements := statement (SEP statement)*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first statement.
/// - `closing`: The token ending the list, or `None` for the whole program.
///
/// # Returns
/// The non-empty statements in source order.
pub fn parse_statement_list<'a, I>(tokens: &mut Peekable<I>,
                                   closing: Option<&Token>)
                                   -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        if let Some(statement) = parse_statement(tokens)? {
            statements.push(statement);
        }

        match (tokens.peek(), closing) {
            (Some((Token::Separator, _)), _) => {
                tokens.next();
            },
            (None, None) => break,
            (Some((tok, _)), Some(closing)) if tok == closing => break,
            (Some((tok, line)), _) => {
                return Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                         line:  *line, });
            },
            (None, Some(_)) => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }

    Ok(statements)
}

/// Parses a block statement delimited by braces.
///
/// A block consists of zero or more statements separated by newlines.
/// Parsing continues until the matching `}` token. `{}` and a block holding
/// only newlines are both empty blocks.
///
/// Grammar: `block := "{" statements "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `line`: Line number of the opening brace.
///
/// # Returns
/// A `Statement::Block` containing all parsed statements.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let statements = parse_statement_list(tokens, Some(&Token::RBrace))?;
    expect_token(tokens, &Token::RBrace, "'}'", line)?;

    Ok(Statement::Block { statements, line })
}
