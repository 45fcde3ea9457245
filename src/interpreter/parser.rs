/// Entry points and shared parser types.
///
/// Contains the program and expression entry points and the `ParseResult`
/// alias used throughout the parser.
pub mod core;

/// Binary operator parsing.
///
/// Implements the three left-associative precedence tiers: additive,
/// multiplicative and comparison (tightest).
pub mod binary;

/// Primary expression parsing.
///
/// Literals, identifiers, builtin calls and parenthesized expressions.
pub mod primary;

/// Statement list and block parsing.
///
/// Handles statement separators, dropping of empty statements and `{ ... }`
/// blocks.
pub mod block;

/// Utility functions for the parser.
///
/// Comma-separated lists, identifier and punctuation expectations.
pub mod utils;

/// Statement parsing.
///
/// Assignments, expression statements and the `if`, `while` and `for` forms,
/// including dangling-`else` resolution.
pub mod statement;
