/// Binary operator evaluation logic.
///
/// Arithmetic on numbers and comparisons on numbers, strings and arbitrary
/// values. Faults become error values here and never escape.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context, top-level
/// interpretation with auto-print, and the environment reset.
pub mod core;

/// The persistent variable environment.
///
/// A single flat map from names to values shared by every statement,
/// block and loop body.
pub mod environment;

/// Evaluation of `if`, `while` and block statements.
pub mod control_flow;

/// Evaluation of `for` statements.
///
/// Binds the loop variable in the shared environment and executes the loop
/// body once per element.
pub mod for_loop;

/// Utility functions for evaluation.
///
/// Provides helpers and reusable routines shared by evaluation logic.
pub mod utils;

/// Function evaluation.
///
/// Resolves calls against the fixed builtin table (`print`, `cat`, `c`,
/// `paste`).
pub mod function;
