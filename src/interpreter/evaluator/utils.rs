use tracing::debug;

use crate::{
    ast::{BinaryOperator, Expr, LiteralValue},
    error::EvalError,
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context {
    /// Evaluates a literal expression.
    ///
    /// Converts the literal value directly into a `Value`. Integer literals
    /// stay integers and real literals stay reals.
    ///
    /// # Example
    /// ```
    /// use rlite::{
    ///     ast::LiteralValue,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// assert_eq!(Context::eval_literal(&7.into()), Value::from(7));
    /// assert_eq!(Context::eval_literal(&7.0.into()), Value::from(7.0));
    /// ```
    #[must_use]
    pub fn eval_literal(value: &LiteralValue) -> Value {
        match value {
            LiteralValue::Number(n) => Value::Number(*n),
            LiteralValue::Str(s) => Value::Str(s.clone()),
        }
    }

    /// Looks up a variable by name.
    ///
    /// An unbound name does not stop evaluation: it yields
    /// `Error: Object '<name>' not found` as an ordinary value.
    pub fn eval_identifier(&self, name: &str) -> Value {
        self.environment.get(name).cloned().unwrap_or_else(|| {
            debug!(name, "lookup of unbound name");
            EvalError::ObjectNotFound { name: name.to_string() }.into()
        })
    }

    /// Evaluates a binary operation.
    ///
    /// Both operands are always evaluated, left first. If either is an error
    /// value the operator is not applied: the left error is returned if there
    /// is one, otherwise the right. This is the only place where errors
    /// propagate on their own.
    pub fn eval_binary_op(&mut self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr,
                          line: usize)
                          -> Value {
        let left = self.eval(left);
        let right = self.eval(right);

        if left.is_error() {
            return left;
        }
        if right.is_error() {
            return right;
        }

        Self::eval_binary(op, &left, &right, line)
    }

    /// Evaluates call arguments left to right.
    pub fn eval_arguments(&mut self, arguments: &[Expr]) -> Vec<Value> {
        arguments.iter().map(|arg| self.eval(arg)).collect()
    }
}
