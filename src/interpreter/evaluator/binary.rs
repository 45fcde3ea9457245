/// Operator dispatch.
pub mod core;
/// Arithmetic on two numbers.
pub mod scalar;
/// Concatenation of strings and lists.
pub mod sequence;
/// Relational and equality operators.
pub mod comparison;
