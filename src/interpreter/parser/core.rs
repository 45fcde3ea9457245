use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_additive, block::parse_statement_list},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest expression tree the parser will build.
pub const MAX_EXPRESSION_DEPTH: usize = 400;
/// Deepest combined nesting of parentheses, blocks and control statements.
pub const MAX_NESTING: usize = 100;

/// Rejects token streams that nest deeper than [`MAX_NESTING`].
///
/// Runs before parsing so that the recursive descent never goes deeper than
/// the limit. Every `(`, `{`, `if`, `while`, `for` and `else` opens a level.
/// `)` and `}` close theirs; a separator closes every control statement
/// opened since the innermost enclosing `{`.
///
/// # Example
/// ```
/// use rlite::interpreter::{lexer::tokenize, parser::core::check_nesting};
///
/// let shallow = tokenize("if (x) { y <- (1 + 2) }");
/// assert!(check_nesting(&shallow.tokens).is_ok());
///
/// let deep = tokenize(&format!("{}1{}", "(".repeat(500), ")".repeat(500)));
/// assert!(check_nesting(&deep.tokens).is_err());
/// ```
pub fn check_nesting(tokens: &[(Token, usize)]) -> ParseResult<()> {
    let mut depth: usize = 0;
    let mut enclosing = Vec::new();

    for (token, line) in tokens {
        match token {
            Token::LBrace => {
                enclosing.push(depth);
                depth += 1;
            },
            Token::RBrace => depth = enclosing.pop().unwrap_or(0),
            Token::LParen | Token::If | Token::While | Token::For | Token::Else => depth += 1,
            Token::RParen => depth = depth.saturating_sub(1),
            Token::Separator => depth = enclosing.last().map_or(0, |open| open + 1),
            _ => {},
        }

        if depth > MAX_NESTING {
            return Err(ParseError::TooDeep { line: *line });
        }
    }

    Ok(())
}

/// Parses a whole program.
///
/// A program is a separator-delimited list of statements running to the end
/// of the token stream. Empty statements are dropped, so an empty or
/// blank-only input yields an empty program.
///
/// Grammar: `program := statement (SEP statement)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed [`Program`], or the first syntax error.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let statements = parse_statement_list(tokens, None)?;

    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens)
}
