use crate::{
    ast::{ConditionalBranch, Expr, Statement},
    error::EvalError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator, Flow, Output},
        lexer::Position,
    },
};

impl Evaluator {
    /// Evaluates an `ila` / `wila ila` / `wila` chain.
    ///
    /// Conditions are evaluated in order until one holds; only the body of
    /// that branch runs. When none holds, the `wila` body runs if there is
    /// one. Every condition that is evaluated must produce a boolean.
    ///
    /// # Parameters
    /// - `branches`: The `ila` branch followed by the `wila ila` branches.
    /// - `otherwise`: The final `wila` body, if present.
    /// - `env`: The session environment.
    /// - `out`: Sink for printed lines.
    ///
    /// # Errors
    /// `TypeMismatch` for a non-boolean condition, plus any error from the
    /// executed body.
    pub(crate) fn eval_conditional(&self,
                                   branches: &[ConditionalBranch],
                                   otherwise: Option<&[Statement]>,
                                   env: &mut Environment,
                                   out: &mut impl Output)
                                   -> EvalResult<Flow> {
        for branch in branches {
            if self.eval_condition(&branch.condition, env)? {
                return self.eval_block(&branch.body, env, out);
            }
        }
        match otherwise {
            Some(body) => self.eval_block(body, env, out),
            None => Ok(Flow::Continue(None)),
        }
    }

    /// Evaluates a `mazal` loop.
    ///
    /// The condition is checked before every iteration; the body runs while it
    /// holds. Blocks share the session environment, so assignments made in
    /// one iteration are visible to the condition and to the next iteration.
    ///
    /// When the evaluator has a `max_loop_iterations` limit, a loop whose
    /// condition still holds after that many iterations fails with
    /// `IterationLimit`. Lines already printed by earlier iterations stay
    /// printed.
    ///
    /// # Parameters
    /// - `condition`: Loop condition.
    /// - `body`: Loop body.
    /// - `position`: Position of the `mazal` keyword.
    /// - `env`: The session environment.
    /// - `out`: Sink for printed lines.
    ///
    /// # Example
    /// ```
    /// use darja::{
    ///     interpreter::{
    ///         environment::Environment,
    ///         evaluator::core::Evaluator,
    ///         lexer::tokenize,
    ///         parser::statement::parse_line,
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let tokens: Vec<_> = tokenize("mazal i < 3 {\n  kteb i\n  i = i + 1\n}", 1).collect();
    /// let statement = parse_line(&tokens);
    ///
    /// let mut env = Environment::new();
    /// env.assign("i", Value::Integer(0));
    /// let mut printed: Vec<String> = Vec::new();
    ///
    /// Evaluator::default().evaluate(&statement, &mut env, &mut printed).unwrap();
    ///
    /// assert_eq!(printed, vec!["0", "1", "2"]);
    /// assert_eq!(env.get("i"), Some(&Value::Integer(3)));
    /// ```
    pub(crate) fn eval_loop(&self,
                            condition: &Expr,
                            body: &[Statement],
                            position: Position,
                            env: &mut Environment,
                            out: &mut impl Output)
                            -> EvalResult<Flow> {
        let mut iterations: u64 = 0;

        while self.eval_condition(condition, env)? {
            if let Some(limit) = self.max_loop_iterations
               && iterations >= limit
            {
                return Err(EvalError::IterationLimit { limit, position });
            }
            iterations += 1;

            if self.eval_block(body, env, out)? == Flow::Terminate {
                return Ok(Flow::Terminate);
            }
        }

        Ok(Flow::Continue(None))
    }

    /// Evaluates a condition, which must produce a boolean.
    fn eval_condition(&self, condition: &Expr, env: &Environment) -> EvalResult<bool> {
        self.eval(condition, env)?
            .as_bool(condition.position())
    }
}
