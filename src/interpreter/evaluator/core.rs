use tracing::{debug, trace};

use crate::{
    ast::{Expr, Program, Statement},
    error::EvalError,
    interpreter::{
        evaluator::{environment::Environment, function::core::EXPLICIT_OUTPUT},
        value::core::Value,
    },
};

/// Result type used inside operator and builtin evaluation.
///
/// An `Err` never leaves the evaluator: it is converted into a
/// [`Value::Error`] before the enclosing expression yields its value.
pub type EvalResult<T> = Result<T, EvalError>;

/// Prefix of every line written by `print` and by auto-print.
pub const PRINT_PREFIX: &str = "[1] ";

/// What one call to [`Context::interpret`] produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    /// Lines written by `print`, `cat` and auto-print, in order.
    pub output:  Vec<String>,
    /// The value of every top-level statement, in order, `Nil` and error
    /// values included.
    pub results: Vec<Value>,
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the persistent environment and
/// the output buffer of the `interpret` call in progress.
///
/// ## Usage
///
/// `Context` is created once per session and reused for every program. The
/// environment carries over between [`Context::interpret`] calls; the output
/// buffer starts empty each time. A `Context` expects one caller at a time
/// and does no locking of its own.
#[derive(Debug, Default)]
pub struct Context {
    /// Variable bindings shared by every statement in every program run on
    /// this context.
    pub environment: Environment,
    pub(crate) output: Vec<String>,
}

impl Context {
    /// Creates a new evaluation context with an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant:
    /// literals, identifiers, binary operations and builtin calls.
    ///
    /// Evaluation never fails. Unknown names, unknown functions and
    /// arithmetic faults come back as [`Value::Error`].
    ///
    /// # Example
    /// ```
    /// use rlite::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::new();
    /// let expr = Expr::Identifier { name: "missing".into(),
    ///                               line: 1, };
    ///
    /// assert_eq!(context.eval(&expr),
    ///            Value::Error("Object 'missing' not found".into()));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> Value {
        match expr {
            Expr::Literal { value, .. } => Self::eval_literal(value),
            Expr::Identifier { name, .. } => self.eval_identifier(name),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => self.eval_binary_op(left, *op, right, *line),
            Expr::Call { name,
                         arguments,
                         line, } => {
                let arg_vals = self.eval_arguments(arguments);
                self.eval_function(name, arg_vals, *line)
            },
        }
    }

    /// Evaluates a single statement.
    ///
    /// Assignments store their value and also yield it. Control-flow
    /// statements and blocks run against the same environment; there is no
    /// nested scope anywhere.
    ///
    /// # Returns
    /// The statement's value, `Value::Nil` when it produces none.
    pub fn eval_statement(&mut self, statement: &Statement) -> Value {
        match statement {
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value);
                self.environment.set(name, value.clone());
                value
            },
            Statement::Expression { expr, .. } => self.eval(expr),
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                self.eval_if(condition, then_branch.as_deref(), else_branch.as_deref())
            },
            Statement::While { condition, body, .. } => {
                self.eval_while(condition, body.as_deref())
            },
            Statement::For { var,
                             sequence,
                             body,
                             .. } => self.eval_for(var, sequence, body.as_deref()),
            Statement::Block { statements, .. } => self.eval_block(statements),
        }
    }

    /// Runs a parsed program and collects its transcript.
    ///
    /// Statements run strictly in order; each one sees the environment and
    /// output left by the previous ones. A top-level expression statement
    /// whose value is not `Nil` is echoed as `"[1] <value>"` unless it is a
    /// direct `print` or `cat` call, which already wrote its own line.
    /// Assignments and control-flow statements are never echoed.
    ///
    /// # Example
    /// ```
    /// use rlite::{interpreter::evaluator::core::Context, parse};
    ///
    /// let mut context = Context::new();
    /// let program = parse("x <- 10\ny <- 20\nz <- x + y\nz").unwrap();
    ///
    /// let transcript = context.interpret(&program);
    /// assert_eq!(transcript.output, vec!["[1] 30".to_string()]);
    /// assert_eq!(transcript.results.len(), 4);
    /// ```
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.len()))]
    pub fn interpret(&mut self, program: &Program) -> Transcript {
        self.output.clear();
        let mut results = Vec::with_capacity(program.len());

        for statement in &program.statements {
            let value = self.eval_statement(statement);

            if let Statement::Expression { expr, .. } = statement
               && !value.is_nil()
               && !expr.is_call_to(EXPLICIT_OUTPUT)
            {
                self.output.push(format!("{PRINT_PREFIX}{value}"));
            }

            trace!(line = statement.line_number(), ?value, "statement evaluated");
            results.push(value);
        }

        let output = std::mem::take(&mut self.output);
        debug!(lines = output.len(), bindings = self.environment.len(), "program finished");

        Transcript { output, results }
    }

    /// Clears every binding in the environment.
    ///
    /// The context keeps its identity; only the contents of its environment
    /// are dropped.
    pub fn reset_environment(&mut self) {
        debug!(bindings = self.environment.len(), "resetting environment");
        self.environment.clear();
    }
}
