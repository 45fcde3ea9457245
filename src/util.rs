/// Numeric conversion and formatting helpers.
///
/// Integer operands are widened to `f64` whenever they meet a real operand,
/// and real numbers are rendered in the compact form the transcript uses
/// (`5.0`, `0.25`, `1e+16`).
pub mod num;
