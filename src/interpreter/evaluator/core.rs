use crate::{
    ast::{Expr, Statement},
    error::EvalError,
    interpreter::{environment::Environment, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// What the session should do after a statement has been evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Keep reading lines.
    ///
    /// Expression statements carry their result so a driver can echo it;
    /// every other statement carries `None`.
    Continue(Option<Value>),
    /// The sentinel was evaluated; the session must stop.
    Terminate,
}

/// A sink for text produced by `kteb`.
///
/// Each call receives one complete output line without its line terminator.
/// Lines are handed over as soon as they are produced, so text printed by a
/// loop before a later iteration fails is never lost.
pub trait Output {
    /// Receives one line of printed text.
    fn emit(&mut self, text: String);
}

impl Output for Vec<String> {
    fn emit(&mut self, text: String) {
        self.push(text);
    }
}

/// Evaluates parsed statements against an environment.
///
/// The evaluator itself is stateless apart from its configuration: all
/// program state lives in the [`Environment`] passed to [`Evaluator::evaluate`].
///
/// ## Usage
///
/// ```
/// use darja::{
///     ast::{Expr, LiteralValue, Statement},
///     interpreter::{
///         environment::Environment,
///         evaluator::core::{Evaluator, Flow},
///         lexer::Position,
///         value::core::Value,
///     },
/// };
///
/// let evaluator = Evaluator::default();
/// let mut env = Environment::new();
/// let mut printed: Vec<String> = Vec::new();
///
/// let statement = Statement::Assignment { name:     "x".to_string(),
///                                         value:    Expr::Literal { value:    LiteralValue::from(7_i64),
///                                                                   position: Position::new(1, 5), },
///                                         position: Position::new(1, 1), };
///
/// let flow = evaluator.evaluate(&statement, &mut env, &mut printed).unwrap();
///
/// assert_eq!(flow, Flow::Continue(None));
/// assert_eq!(env.get("x"), Some(&Value::Integer(7)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    /// Upper bound on the iterations of a single `mazal` loop, if any.
    pub max_loop_iterations: Option<u64>,
}

impl Evaluator {
    /// Creates an evaluator with the given loop iteration limit.
    #[must_use]
    pub const fn new(max_loop_iterations: Option<u64>) -> Self {
        Self { max_loop_iterations }
    }

    /// Evaluates a single statement.
    ///
    /// Handles assignments, expression statements, printing, conditionals,
    /// loops and the sentinel. Assignments evaluate their right side
    /// completely before binding, so a failing expression leaves the
    /// environment untouched.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    /// - `env`: The session environment, mutated in place.
    /// - `out`: Sink for printed lines.
    ///
    /// # Returns
    /// The [`Flow`] telling the caller whether to continue.
    ///
    /// # Errors
    /// Any [`EvalError`] raised while evaluating. An `Invalid` statement is
    /// returned as [`EvalError::Unparsed`] carrying its parse error unchanged.
    pub fn evaluate(&self,
                    statement: &Statement,
                    env: &mut Environment,
                    out: &mut impl Output)
                    -> EvalResult<Flow> {
        match statement {
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value, env)?;
                env.assign(name, value);
                Ok(Flow::Continue(None))
            },
            Statement::Expression { expr, .. } => {
                let value = self.eval(expr, env)?;
                Ok(Flow::Continue(Some(value)))
            },
            Statement::Print { values, .. } => {
                self.eval_print(values, env, out)?;
                Ok(Flow::Continue(None))
            },
            Statement::Conditional { branches,
                                     otherwise,
                                     .. } => {
                self.eval_conditional(branches, otherwise.as_deref(), env, out)
            },
            Statement::Loop { condition,
                              body,
                              position, } => self.eval_loop(condition, body, *position, env, out),
            Statement::Termination { .. } => Ok(Flow::Terminate),
            Statement::Invalid { error } => Err(EvalError::Unparsed(error.clone())),
        }
    }

    /// Evaluates a sequence of statements in order.
    ///
    /// Stops at the first error or at a [`Flow::Terminate`], which is passed
    /// on to the caller.
    pub(crate) fn eval_block(&self,
                             statements: &[Statement],
                             env: &mut Environment,
                             out: &mut impl Output)
                             -> EvalResult<Flow> {
        for statement in statements {
            if self.evaluate(statement, env, out)? == Flow::Terminate {
                return Ok(Flow::Terminate);
            }
        }
        Ok(Flow::Continue(None))
    }

    /// Evaluates the values of a `kteb` statement and emits them as one line,
    /// separated by spaces.
    ///
    /// Every value is evaluated before anything is emitted.
    fn eval_print(&self,
                  values: &[Expr],
                  env: &Environment,
                  out: &mut impl Output)
                  -> EvalResult<()> {
        let rendered = values.iter()
                             .map(|expr| self.eval(expr, env).map(|value| value.to_string()))
                             .collect::<EvalResult<Vec<_>>>()?;
        out.emit(rendered.join(" "));
        Ok(())
    }
}
