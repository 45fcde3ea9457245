use thiserror::Error;

/// Failures detected while evaluating an expression.
///
/// These never propagate as `Err`. The evaluator turns each one into a
/// [`Value::Error`](crate::interpreter::value::core::Value::Error) carrying
/// the `Display` text below, which then flows like any other value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Lookup of a name that is not bound in the environment.
    #[error("Object '{name}' not found")]
    ObjectNotFound {
        /// The name that was looked up.
        name: String,
    },
    /// Call of a name that is not one of the builtins.
    #[error("Function '{name}' not found")]
    FunctionNotFound {
        /// The name that was called.
        name: String,
    },
    /// Any fault while applying a binary operator: division by zero, overflow,
    /// a non-finite result, or operands of the wrong kind.
    #[error("Arithmetic error")]
    Arithmetic,
}
