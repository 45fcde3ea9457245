use crate::interpreter::value::number::Number;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw constants that can appear directly in source
/// code: numbers (integer or real, as written) and quoted strings.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A numeric literal such as `42` or `2.5`.
    Number(Number),
    /// A string literal with its quotes removed.
    Str(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Number(Number::Integer(value))
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(Number::Real(value))
    }
}

impl From<Number> for LiteralValue {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions produce values and never bind names; binding only happens
/// through [`Statement::Assignment`] and `for` loops.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal number or string.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (arithmetic or comparison).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator.
        line:  usize,
    },
    /// Builtin function call (e.g. `print(x)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use rlite::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Identifier { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }

    /// Returns `true` when `self` is a direct call to one of `names`.
    #[must_use]
    pub fn is_call_to(&self, names: &[&str]) -> bool {
        matches!(self, Self::Call { name, .. } if names.contains(&name.as_str()))
    }

    /// Height of the expression tree; a literal or identifier has depth 1.
    ///
    /// ## Example
    /// ```
    /// use rlite::parse;
    /// use rlite::ast::Statement;
    ///
    /// let program = parse("1 + 2 * (3 - 4)").unwrap();
    /// let Statement::Expression { expr, .. } = &program.statements[0] else { unreachable!() };
    /// assert_eq!(expr.depth(), 4);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Literal { .. } | Self::Identifier { .. } => 1,
            Self::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
            Self::Call { arguments, .. } => {
                1 + arguments.iter().map(Self::depth).max().unwrap_or(0)
            },
        }
    }
}

/// Represents a statement.
///
/// Control-flow bodies are `None` when the source supplies the empty
/// statement there, as in `while (f(x))` followed directly by a newline.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `name <- value` or `name = value`.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `if (condition) then_branch [else else_branch]`.
    If {
        /// The condition expression.
        condition:   Expr,
        /// Statement run when the condition is truthy.
        then_branch: Option<Box<Self>>,
        /// Statement run when the condition is falsy.
        else_branch: Option<Box<Self>>,
        /// Line number of the `if` keyword.
        line:        usize,
    },
    /// `while (condition) body`.
    While {
        /// Re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Option<Box<Self>>,
        /// Line number of the `while` keyword.
        line:      usize,
    },
    /// `for (var in sequence) body`.
    For {
        /// The loop variable name.
        var:      String,
        /// The sequence expression, evaluated once.
        sequence: Expr,
        /// The loop body.
        body:     Option<Box<Self>>,
        /// Line number of the `for` keyword.
        line:     usize,
    },
    /// `{ statements }`.
    Block {
        /// Statements inside the block, empty statements removed.
        statements: Vec<Self>,
        /// Line number of the opening brace.
        line:       usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Assignment { line, .. }
            | Self::Expression { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::For { line, .. }
            | Self::Block { line, .. } => *line,
        }
    }
}

/// A parsed source text: its top-level statements in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    /// Top-level statements, empty statements removed.
    pub statements: Vec<Statement>,
}

impl Program {
    /// Returns `true` when the source contained no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Number of top-level statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl BinaryOperator {
    /// Returns `true` for the six comparison operators.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Less
                 | Self::Greater
                 | Self::LessEqual
                 | Self::GreaterEqual
                 | Self::Equal
                 | Self::NotEqual)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}
