use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{MAX_EXPRESSION_DEPTH, ParseResult},
            primary::parse_primary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`. This is the
/// loosest-binding tier.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_tier(tokens,
               |op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub),
               parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `multiplicative := comparison (("*" | "/") comparison)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// A binary expression tree combining comparison-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_tier(tokens,
               |op| matches!(op, BinaryOperator::Mul | BinaryOperator::Div),
               parse_comparison)
}

/// Parses relational and equality operators.
///
/// Comparisons bind tighter than arithmetic: `1 + 2 > 1` is `1 + (2 > 1)`
/// and `a > b * c` is `(a > b) * c`. Chains associate to the left.
///
/// The rule is: `comparison := primary (("<" | ">" | "<=" | ">=" | "==" |
/// "!=") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream (token + line number) wrapped in a `Peekable`.
///
/// # Returns
/// A possibly nested `Expr::BinaryOp` tree.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_tier(tokens, BinaryOperator::is_comparison, parse_primary)
}

/// Parses one left-associative precedence tier.
///
/// Operands are parsed with `parse_operand`; every following operator
/// accepted by `in_tier` folds the tree to the left. A fold that would make
/// the tree deeper than [`MAX_EXPRESSION_DEPTH`] is rejected with
/// [`ParseError::TooDeep`].
fn parse_tier<'a, I>(tokens: &mut Peekable<I>,
                     in_tier: impl Fn(BinaryOperator) -> bool,
                     parse_operand: impl Fn(&mut Peekable<I>) -> ParseResult<Expr>)
                     -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_operand(tokens)?;
    let mut depth = left.depth();
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && in_tier(op)
        {
            let line = *line;
            tokens.next();
            let right = parse_operand(tokens)?;
            depth = 1 + depth.max(right.depth());
            if depth > MAX_EXPRESSION_DEPTH {
                return Err(ParseError::TooDeep { line });
            }
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token is one of the arithmetic or
/// comparison operators, `None` for all other tokens.
///
/// # Example
/// ```
/// use rlite::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Star), Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(&Token::Assign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}
