use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::number::Number,
    },
};

impl Context {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// - `+`, `-` and `*` on two integers stay integers while the result fits
    ///   in `i64`; on overflow the operation is redone on `f64`.
    /// - With a real operand on either side, both are widened to `f64`.
    /// - `/` is true division: it always yields a real, and a zero divisor
    ///   (integer or real) is a fault.
    /// - A real result that is infinite or NaN is a fault.
    ///
    /// The operator must be one of `Add`, `Sub`, `Mul` or `Div`.
    ///
    /// # Example
    /// ```
    /// use rlite::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::number::Number},
    /// };
    ///
    /// let x = Number::Integer(10);
    /// let y = Number::Integer(4);
    ///
    /// let result = Context::eval_scalar_op(BinaryOperator::Div, x, y).unwrap();
    /// assert_eq!(result, Number::Real(2.5));
    ///
    /// let big = Context::eval_scalar_op(BinaryOperator::Add, Number::Integer(i64::MAX), y).unwrap();
    /// assert!(matches!(big, Number::Real(_)));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator, left: Number, right: Number) -> EvalResult<Number> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Number::{Integer, Real};

        match (op, left, right) {
            (Div, ..) => {
                if right.is_zero() {
                    return Err(EvalError::Arithmetic);
                }
                finite(left.as_f64() / right.as_f64())
            },
            (_, Integer(a), Integer(b)) => {
                let exact = match op {
                    Add => a.checked_add(b),
                    Sub => a.checked_sub(b),
                    Mul => a.checked_mul(b),
                    _ => None,
                };
                exact.map_or_else(|| real_op(op, left.as_f64(), right.as_f64()),
                                  |n| Ok(Integer(n)))
            },
            (_, Real(_), _) | (_, _, Real(_)) => real_op(op, left.as_f64(), right.as_f64()),
        }
    }
}

/// Applies `+`, `-` or `*` to two reals.
fn real_op(op: BinaryOperator, a: f64, b: f64) -> EvalResult<Number> {
    finite(match op {
               BinaryOperator::Add => a + b,
               BinaryOperator::Sub => a - b,
               BinaryOperator::Mul => a * b,
               _ => return Err(EvalError::Arithmetic),
           })
}

/// Wraps a real result, rejecting infinities and NaN.
fn finite(value: f64) -> EvalResult<Number> {
    if value.is_finite() {
        Ok(Number::Real(value))
    } else {
        Err(EvalError::Arithmetic)
    }
}
