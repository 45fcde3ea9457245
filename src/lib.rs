//! # rlite
//!
//! rlite is an interpreter for a small R-flavoured scripting language written
//! in Rust. It lexes, parses and evaluates scripts with variables, arithmetic,
//! comparisons, `if`/`while`/`for` control flow, lists and a handful of
//! builtins, producing the console transcript an R session would show.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        evaluator::core::{Context, Transcript},
        lexer::{Token, tokenize},
        parser::core::{check_nesting, parse_program},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of a script as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches the source line to every node.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Lexer errors are recovered diagnostics, parse errors abort a run, and
/// evaluation errors only exist long enough to be turned into error values.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and user-facing messages.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the value
/// representations to provide a complete runtime for scripts.
pub mod interpreter;
/// Interactive read-eval-print loop used by the `rlite` binary.
pub mod repl;
/// General numeric helpers shared by the value model and the evaluator.
pub mod util;

/// Lexes and parses a script into a [`Program`].
///
/// Illegal characters are skipped by the lexer and only logged; the first
/// syntax error aborts parsing.
///
/// # Examples
/// ```
/// use rlite::parse;
///
/// let program = parse("x <- 5\nprint(x)").unwrap();
/// assert_eq!(program.len(), 2);
///
/// let err = parse("x <- ").unwrap_err();
/// assert_eq!(err.to_string(), "Syntax error on line 1: unexpected end of input");
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let lexed = tokenize(source);
    if !lexed.diagnostics.is_empty() {
        debug!(skipped = lexed.diagnostics.len(), "lexer skipped illegal characters");
    }

    parse_tokens(&lexed.tokens)
}

/// Parses an already tokenized script.
///
/// An error at the end of the input is reported on the line of the last
/// token. Input nested too deeply is rejected before parsing starts.
pub fn parse_tokens(tokens: &[(Token, usize)]) -> Result<Program, ParseError> {
    let last_line = tokens.last().map_or(1, |(_, line)| *line);
    check_nesting(tokens)?;

    parse_program(&mut tokens.iter().peekable()).map_err(|e| {
                                                      debug!(%e, "parse failed");
                                                      e.at_end_of_input(last_line)
                                                  })
}

/// Parses a script and runs it on the given context.
///
/// On a syntax error nothing is evaluated and the context is left untouched.
///
/// # Examples
/// ```
/// use rlite::{interpreter::evaluator::core::Context, run};
///
/// let mut context = Context::new();
///
/// let transcript = run(&mut context, "x <- 5\nprint(x)").unwrap();
/// assert_eq!(transcript.output, vec!["[1] 5".to_string()]);
///
/// // The environment carries over to the next run.
/// let transcript = run(&mut context, "x * 2").unwrap();
/// assert_eq!(transcript.output, vec!["[1] 10".to_string()]);
/// ```
pub fn run(context: &mut Context, source: &str) -> Result<Transcript, ParseError> {
    let program = parse(source)?;
    Ok(context.interpret(&program))
}
