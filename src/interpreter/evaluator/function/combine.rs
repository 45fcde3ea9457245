use crate::interpreter::value::core::Value;

/// Returns a list holding the arguments in call order.
///
/// Nested lists are kept as elements; nothing is flattened.
///
/// # Example
/// ```
/// use rlite::interpreter::{evaluator::function::combine::combine, value::core::Value};
///
/// let list = combine(&mut Vec::new(), vec![1.into(), 2.into(), 3.into()]);
/// assert_eq!(list.to_string(), "[1, 2, 3]");
/// ```
pub fn combine(_output: &mut Vec<String>, args: Vec<Value>) -> Value {
    args.into()
}
