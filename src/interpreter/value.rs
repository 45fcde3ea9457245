/// Numeric values.
///
/// Defines [`Number`](number::Number), which keeps the lexical distinction
/// between integer literals (`5`) and real literals (`5.0`) all the way into
/// evaluation and display.
pub mod number;

pub mod core;
