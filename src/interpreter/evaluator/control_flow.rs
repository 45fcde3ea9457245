use crate::{
    ast::{Expr, Statement},
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context {
    /// Evaluates an `if` statement.
    ///
    /// The condition is judged with [`Value::is_truthy`]. An error value is
    /// not special here: it is a non-empty value and therefore true.
    ///
    /// # Returns
    /// The value of the branch taken, or `Nil` when no branch runs.
    pub fn eval_if(&mut self,
                   condition: &Expr,
                   then_branch: Option<&Statement>,
                   else_branch: Option<&Statement>)
                   -> Value {
        if self.eval(condition).is_truthy() {
            self.eval_body(then_branch)
        } else {
            self.eval_body(else_branch)
        }
    }

    /// Evaluates a `while` statement.
    ///
    /// The condition is re-evaluated before each iteration. There is no
    /// iteration limit.
    ///
    /// # Returns
    /// The value of the last body execution, `Nil` if the body never ran.
    pub fn eval_while(&mut self, condition: &Expr, body: Option<&Statement>) -> Value {
        let mut last_value = Value::Nil;

        while self.eval(condition).is_truthy() {
            last_value = self.eval_body(body);
        }

        last_value
    }

    /// Evaluates a sequence of statements as a block.
    ///
    /// Statements run in order in the enclosing environment; assignments made
    /// inside the block remain visible after it.
    ///
    /// # Example
    /// ```
    /// use rlite::{interpreter::{evaluator::core::Context, value::core::Value}, parse};
    ///
    /// let mut context = Context::new();
    /// let program = parse("{ a <- 1\n b <- a + 1 }").unwrap();
    ///
    /// let transcript = context.interpret(&program);
    /// assert_eq!(transcript.results, vec![Value::from(2)]);
    /// assert_eq!(context.environment.get("a"), Some(&Value::from(1)));
    /// ```
    ///
    /// # Returns
    /// The value of the last statement, `Nil` for an empty block.
    pub fn eval_block(&mut self, statements: &[Statement]) -> Value {
        let mut last = Value::Nil;

        for stmt in statements {
            last = self.eval_statement(stmt);
        }

        last
    }

    /// Evaluates an optional statement; the empty statement yields `Nil`.
    pub(crate) fn eval_body(&mut self, body: Option<&Statement>) -> Value {
        body.map_or(Value::Nil, |stmt| self.eval_statement(stmt))
    }
}
