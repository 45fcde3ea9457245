/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST against one flat environment, applies
/// operators and builtins, and collects the lines a program writes. It never
/// fails: every runtime fault becomes an error value that flows on like any
/// other value.
///
/// # Responsibilities
/// - Evaluates statements and expressions, including `if`, `while` and `for`.
/// - Holds variable state across programs run on the same context.
/// - Dispatches the builtins `print`, `cat`, `c` and `paste`.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens,
/// each paired with the line it starts on. Runs of line breaks collapse into
/// one separator token; spaces, tabs and comments are dropped.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Handles numeric and string literals, identifiers, keywords and
///   operators.
/// - Skips illegal characters one at a time and reports them as diagnostics.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A hand-written recursive-descent parser over a peekable token iterator.
/// It encodes the three left-associative precedence tiers, the statement
/// separator rules and the binding of `else` to the nearest `if`.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Numbers (integer or real), strings, lists, error values and `Nil`,
/// together with their truthiness, equality and display rules.
pub mod value;
