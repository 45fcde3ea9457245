use std::rc::Rc;

use crate::{
    ast::{Expr, Statement},
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context {
    /// Evaluates a `for` statement.
    ///
    /// The sequence expression is evaluated once. A list is iterated element
    /// by element; any other value (including `Nil` and error values) is
    /// treated as a one-element list holding that value.
    ///
    /// The loop variable is bound in the shared environment, not in a loop
    /// scope, so after the loop it still holds the last element.
    ///
    /// # Parameters
    /// - `var`: Loop variable name.
    /// - `sequence`: Expression producing the values to iterate.
    /// - `body`: Loop body, `None` for the empty statement.
    ///
    /// # Returns
    /// The last body value, or `Nil` if the loop did not run.
    ///
    /// # Example
    /// ```
    /// use rlite::{interpreter::{evaluator::core::Context, value::core::Value}, parse};
    ///
    /// let mut context = Context::new();
    /// let program = parse("for (i in c(1, 2, 3)) i * 10").unwrap();
    ///
    /// let transcript = context.interpret(&program);
    /// assert_eq!(transcript.results, vec![Value::from(30)]);
    /// assert_eq!(context.environment.get("i"), Some(&Value::from(3)));
    /// ```
    pub fn eval_for(&mut self, var: &str, sequence: &Expr, body: Option<&Statement>) -> Value {
        let items = match self.eval(sequence) {
            Value::List(items) => items,
            single => Rc::new(vec![single]),
        };

        let mut last_value = Value::Nil;

        for element in items.iter() {
            self.environment.set(var, element.clone());
            last_value = self.eval_body(body);
        }

        last_value
    }
}
