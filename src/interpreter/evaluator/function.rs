/// Builtin lookup table and call dispatch.
pub mod core;
/// The `print` function implementation.
///
/// Writes one `[1] `-prefixed line and returns its argument.
pub mod print;
/// The `cat` function implementation.
pub mod cat;
/// The `c` (combine) function implementation.
///
/// Collects its arguments into a list.
pub mod combine;
/// The `paste` function implementation.
pub mod paste;
