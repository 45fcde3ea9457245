use std::rc::Rc;

use crate::{error::EvalError, interpreter::value::number::Number};

/// Represents a runtime value in the interpreter.
///
/// This is a closed set: every expression evaluates to exactly one of these
/// variants. Failures are values too: [`Value::Error`] is stored, passed and
/// printed like any other variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer or real number.
    Number(Number),
    /// A text value. Produced by string literals and `paste`.
    Str(String),
    /// An ordered sequence of values. Produced only by the `c` builtin.
    List(Rc<Vec<Self>>),
    /// A failure carried as data. Holds the message without the `Error: `
    /// prefix that is added on display.
    Error(String),
    /// The absence of a value: empty blocks, loops that never ran, `cat`.
    Nil,
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(Number::Integer(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(Number::Real(v))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Number(v.into())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(v))
    }
}

impl From<EvalError> for Value {
    fn from(e: EvalError) -> Self {
        Self::Error(e.to_string())
    }
}

impl Value {
    /// Decides whether the value counts as true in a condition.
    ///
    /// Zero, the empty string, the empty list and `Nil` are false. Everything
    /// else is true, including every error value: conditions do not inspect
    /// errors.
    ///
    /// # Example
    /// ```
    /// use rlite::interpreter::value::core::Value;
    ///
    /// assert!(Value::from(3).is_truthy());
    /// assert!(!Value::from(0.0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(Value::Error("Arithmetic error".into()).is_truthy());
    /// assert!(!Value::Nil.is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => !n.is_zero(),
            Self::Str(s) => !s.is_empty(),
            Self::List(items) => !items.is_empty(),
            Self::Error(_) => true,
            Self::Nil => false,
        }
    }

    /// Returns `true` if the value is [`Value::Error`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(..))
    }

    /// Returns `true` if the value is [`Value::Nil`].
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Structural equality as used by `==` and `!=`.
    ///
    /// Numbers compare numerically across integer and real, so `1 == 1.0`
    /// holds. Values of different kinds are never equal. Lists compare
    /// element-wise.
    #[must_use]
    pub fn loose_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.compare(*b) == Some(std::cmp::Ordering::Equal),
            (Self::Str(a), Self::Str(b)) | (Self::Error(a), Self::Error(b)) => a == b,
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.loose_eq(y))
            },
            (Self::Nil, Self::Nil) => true,
            _ => false,
        }
    }

    /// Builds the space-joined string form used by `cat` and `paste`.
    ///
    /// # Example
    /// ```
    /// use rlite::interpreter::value::core::Value;
    ///
    /// let parts = [Value::from("total:"), Value::from(6), Value::from(1.5)];
    /// assert_eq!(Value::join_display(&parts), "total: 6 1.5");
    /// ```
    #[must_use]
    pub fn join_display(values: &[Self]) -> String {
        values.iter()
              .map(ToString::to_string)
              .collect::<Vec<_>>()
              .join(" ")
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
            Self::List(items) => {
                write!(f, "[")?;

                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Error(message) => write!(f, "Error: {message}"),
            Self::Nil => Ok(()),
        }
    }
}
