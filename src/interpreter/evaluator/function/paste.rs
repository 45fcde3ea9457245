use crate::interpreter::value::core::Value;

/// Joins the display forms of the arguments with single spaces.
///
/// Nothing is written to the output buffer.
pub fn paste(_output: &mut Vec<String>, args: Vec<Value>) -> Value {
    Value::join_display(&args).into()
}
