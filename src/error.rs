/// Lexing diagnostics.
///
/// The lexer never aborts. Every character it cannot classify is reported as a
/// [`LexError`] and skipped, so these values are collected rather than
/// returned as failures.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning a token stream into an
/// abstract syntax tree. The first syntax error aborts the parse and no partial
/// tree is produced.
pub mod parse_error;
/// Evaluation errors.
///
/// Evaluation never raises. The failures listed here (unknown object, unknown
/// function, arithmetic fault) are converted into ordinary
/// [`Value::Error`](crate::interpreter::value::core::Value::Error) values at
/// the point where they occur.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
