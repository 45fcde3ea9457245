use crate::interpreter::{evaluator::core::PRINT_PREFIX, value::core::Value};

/// Writes `"[1] <value>"` for the first argument and returns that argument.
///
/// Extra arguments are ignored. Without arguments the printed value is
/// `Nil`, which renders as an empty string. The line is written wherever the
/// call appears, nested expressions included.
///
/// # Parameters
/// - `output`: Output buffer of the running program.
/// - `args`: Evaluated arguments.
///
/// # Example
/// ```
/// use rlite::interpreter::{evaluator::function::print::print, value::core::Value};
///
/// let mut output = Vec::new();
/// let result = print(&mut output, vec![Value::from(42), Value::from("ignored")]);
///
/// assert_eq!(result, Value::from(42));
/// assert_eq!(output, vec!["[1] 42".to_string()]);
/// ```
pub fn print(output: &mut Vec<String>, args: Vec<Value>) -> Value {
    let value = args.into_iter().next().unwrap_or(Value::Nil);
    output.push(format!("{PRINT_PREFIX}{value}"));
    value
}
