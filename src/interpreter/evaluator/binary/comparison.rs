use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a comparison between two values.
    ///
    /// - `==` and `!=` accept any pair of values and compare them with
    ///   [`Value::loose_eq`]; values of different kinds are unequal.
    /// - `<`, `>`, `<=` and `>=` order two numbers numerically and two strings
    ///   lexicographically. Two lists are ordered by their first unequal
    ///   elements, a shorter prefix sorting first. Any other pairing is a
    ///   fault, including lists whose first unequal elements cannot be
    ///   ordered.
    ///
    /// There is no boolean type: the result is the integer `1` when the
    /// comparison holds and `0` otherwise.
    ///
    /// # Example
    /// ```
    /// use rlite::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result =
    ///     Context::eval_comparison(BinaryOperator::Less, &"apple".into(), &"banana".into()).unwrap();
    /// assert_eq!(result, Value::from(1));
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Equal, &1.into(), &"1".into()).unwrap();
    /// assert_eq!(result, Value::from(0));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let holds = match op {
            Equal => left.loose_eq(right),
            NotEqual => !left.loose_eq(right),
            Less | Greater | LessEqual | GreaterEqual => {
                let ordering = order(left, right).ok_or(EvalError::Arithmetic)?;
                match op {
                    Less => ordering == Ordering::Less,
                    Greater => ordering == Ordering::Greater,
                    LessEqual => ordering != Ordering::Greater,
                    _ => ordering != Ordering::Less,
                }
            },
            _ => return Err(EvalError::Arithmetic),
        };

        Ok(holds.into())
    }
}

/// Orders two numbers, two strings or two lists; `None` for anything else.
fn order(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.compare(*b),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        (Value::List(a), Value::List(b)) => {
            match a.iter().zip(b.iter()).find(|(x, y)| !x.loose_eq(y)) {
                Some((x, y)) => order(x, y),
                None => Some(a.len().cmp(&b.len())),
            }
        },
        _ => None,
    }
}
