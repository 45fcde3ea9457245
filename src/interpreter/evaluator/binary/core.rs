use tracing::debug;

use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// Comparison operators go to `eval_comparison`. Arithmetic on two numbers
    /// goes to `eval_scalar_op`; `+` on two strings or two lists goes to
    /// `eval_concat`. Any other operand pairing is an arithmetic fault. Every fault is turned into the error value
    /// `Error: Arithmetic error`.
    ///
    /// Operands are expected to be free of error values already; the caller
    /// short-circuits on those.
    ///
    /// # Example
    /// ```
    /// use rlite::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let sum = Context::eval_binary(BinaryOperator::Add, &3.into(), &4.into(), 1);
    /// assert_eq!(sum, Value::from(7));
    ///
    /// let bad = Context::eval_binary(BinaryOperator::Div, &1.into(), &0.into(), 1);
    /// assert_eq!(bad, Value::Error("Arithmetic error".into()));
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> Value {
        let result = if op.is_comparison() {
            Self::eval_comparison(op, left, right)
        } else {
            match (left, right) {
                (Value::Number(a), Value::Number(b)) => {
                    Self::eval_scalar_op(op, *a, *b).map(Value::from)
                },
                (Value::Str(_), Value::Str(_)) | (Value::List(_), Value::List(_)) => {
                    Self::eval_concat(op, left, right)
                },
                _ => Err(EvalError::Arithmetic),
            }
        };

        result.unwrap_or_else(|e| {
                  debug!(line, %op, %left, %right, "operator fault");
                  e.into()
              })
    }
}
