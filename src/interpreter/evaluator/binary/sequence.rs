use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `+` on two strings or two lists by joining them end to end.
    ///
    /// Every other operator, and any pairing of a string with a list, is an
    /// arithmetic fault.
    ///
    /// # Example
    /// ```
    /// use rlite::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let joined = Context::eval_concat(BinaryOperator::Add, &"ab".into(), &"cd".into()).unwrap();
    /// assert_eq!(joined, Value::from("abcd"));
    ///
    /// let list = Context::eval_concat(BinaryOperator::Add,
    ///                                 &Value::from(vec![Value::from(1)]),
    ///                                 &Value::from(vec![Value::from(2)])).unwrap();
    /// assert_eq!(list.to_string(), "[1, 2]");
    ///
    /// assert!(Context::eval_concat(BinaryOperator::Sub, &"a".into(), &"b".into()).is_err());
    /// ```
    pub fn eval_concat(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        match (op, left, right) {
            (BinaryOperator::Add, Value::Str(a), Value::Str(b)) => Ok(format!("{a}{b}").into()),
            (BinaryOperator::Add, Value::List(a), Value::List(b)) => {
                Ok(a.iter().chain(b.iter()).cloned().collect::<Vec<_>>().into())
            },
            _ => Err(EvalError::Arithmetic),
        }
    }
}
