use crate::interpreter::value::core::Value;

/// Writes the arguments on one line, separated by single spaces.
///
/// With no arguments an empty line is written. `cat` has no value of its own
/// and returns `Nil`.
///
/// # Example
/// ```
/// use rlite::interpreter::{evaluator::function::cat::cat, value::core::Value};
///
/// let mut output = Vec::new();
/// let result = cat(&mut output, vec![1.into(), "a".into(), 2.5.into()]);
///
/// assert_eq!(result, Value::Nil);
/// assert_eq!(output, vec!["1 a 2.5".to_string()]);
/// ```
pub fn cat(output: &mut Vec<String>, args: Vec<Value>) -> Value {
    output.push(Value::join_display(&args));
    Value::Nil
}
