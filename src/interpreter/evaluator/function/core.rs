use tracing::debug;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            core::Context,
            function::{cat, combine, paste, print},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the output buffer of the running program and its
/// evaluated arguments, and always produces a value. Builtins are variadic;
/// each one decides what to do with missing or extra arguments.
type BuiltinFn = fn(&mut Vec<String>, Vec<Value>) -> Value;

/// Defines builtin functions by generating a lookup table.
///
/// Each entry maps a string name to a function pointer implementing the
/// builtin. The macro produces `BuiltinDef` (internal metadata) and
/// `BUILTIN_TABLE` (static table for lookup).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name: &'static str,
            func: BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "print" => print::print,
    "cat"   => cat::cat,
    "c"     => combine::combine,
    "paste" => paste::paste,
}

/// Builtins that write their own output line.
///
/// A top-level statement that is a direct call to one of these is not
/// echoed again.
pub const EXPLICIT_OUTPUT: &[&str] = &["print", "cat"];

impl Context {
    /// Evaluates a function call.
    ///
    /// Only builtins exist; there are no user-defined functions. The
    /// arguments have already been evaluated left to right.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arg_vals`: Evaluated argument values.
    /// - `line`: Line number of the call, for diagnostics.
    ///
    /// # Returns
    /// The builtin's result, or the error value
    /// `Error: Function '<name>' not found` for an unknown name.
    pub(crate) fn eval_function(&mut self, name: &str, arg_vals: Vec<Value>, line: usize) -> Value {
        match BUILTIN_TABLE.iter().find(|b| b.name == name) {
            Some(builtin) => (builtin.func)(&mut self.output, arg_vals),
            None => {
                debug!(line, name, "unknown function");
                EvalError::FunctionNotFound { name: name.to_string() }.into()
            },
        }
    }
}
