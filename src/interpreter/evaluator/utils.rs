use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::EvalError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        lexer::Position,
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant: literals,
    /// variables, unary and binary operations, and builtin calls. Expressions
    /// never modify the environment.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: Environment used to resolve variables.
    ///
    /// # Example
    /// ```
    /// use darja::{
    ///     ast::{BinaryOperator, Expr, LiteralValue},
    ///     interpreter::{
    ///         environment::Environment, evaluator::core::Evaluator, lexer::Position,
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let at = Position::new(1, 1);
    /// let expr = Expr::BinaryOp { left:     Box::new(Expr::Literal { value:    LiteralValue::from(2_i64),
    ///                                                                position: at, }),
    ///                             op:       BinaryOperator::Mul,
    ///                             right:    Box::new(Expr::Literal { value:    LiteralValue::Float(1.5),
    ///                                                                position: at, }),
    ///                             position: at, };
    ///
    /// let value = Evaluator::default().eval(&expr, &Environment::new()).unwrap();
    /// assert_eq!(value, Value::Float(3.0));
    /// ```
    pub fn eval(&self, expr: &Expr, env: &Environment) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, position } => Value::from_literal(value, *position),
            Expr::Variable { name, position } => Self::eval_variable(name, *position, env),
            Expr::UnaryOp { op, expr, position } => self.eval_unary_op(*op, expr, *position, env),
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => self.eval_binary_op(left, *op, right, *position, env),
            Expr::Call { name,
                         arguments,
                         position, } => self.eval_function_call(name, arguments, *position, env),
        }
    }

    /// Looks up a variable by name.
    ///
    /// If the variable is not bound, an `UnboundVariable` error is returned.
    ///
    /// # Example
    /// ```
    /// use darja::interpreter::{
    ///     environment::Environment, evaluator::core::Evaluator, lexer::Position,
    ///     value::core::Value,
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.assign("x", Value::Integer(10));
    ///
    /// let v = Evaluator::eval_variable("x", Position::new(1, 1), &env).unwrap();
    /// assert_eq!(v, Value::Integer(10));
    /// assert!(Evaluator::eval_variable("y", Position::new(1, 1), &env).is_err());
    /// ```
    pub fn eval_variable(name: &str, position: Position, env: &Environment) -> EvalResult<Value> {
        env.get(name)
           .cloned()
           .ok_or_else(|| EvalError::UnboundVariable { name: name.to_string(),
                                                       position })
    }

    /// Evaluates a unary operator applied to a subexpression.
    fn eval_unary_op(&self,
                     op: UnaryOperator,
                     expr: &Expr,
                     position: Position,
                     env: &Environment)
                     -> EvalResult<Value> {
        let value = self.eval(expr, env)?;
        Self::eval_unary(op, &value, position)
    }

    /// Evaluates a binary operation on two subexpressions.
    ///
    /// `&&` and `||` short-circuit: the right operand is only evaluated when
    /// the left one does not decide the result. Every other operator
    /// evaluates both sides, left first, and delegates to
    /// [`Evaluator::eval_binary`].
    fn eval_binary_op(&self,
                      left: &Expr,
                      op: BinaryOperator,
                      right: &Expr,
                      position: Position,
                      env: &Environment)
                      -> EvalResult<Value> {
        let left = self.eval(left, env)?;

        if matches!(op, BinaryOperator::And | BinaryOperator::Or) {
            let decided = left.as_bool(position)?;
            if decided == (op == BinaryOperator::Or) {
                return Ok(Value::Bool(decided));
            }
        }

        let right = self.eval(right, env)?;
        Self::eval_binary(op, &left, &right, position)
    }

    /// Evaluates the arguments of a call, left to right, and invokes the
    /// builtin.
    fn eval_function_call(&self,
                          name: &str,
                          arguments: &[Expr],
                          position: Position,
                          env: &Environment)
                          -> EvalResult<Value> {
        let arg_vals = arguments.iter()
                                .map(|arg| self.eval(arg, env))
                                .collect::<EvalResult<Vec<_>>>()?;
        Self::eval_function(name, &arg_vals, position)
    }
}

/// Builds the `TypeMismatch` error for an operator applied to values it does
/// not support.
///
/// ## Example
/// ```
/// use darja::{
///     ast::BinaryOperator,
///     error::EvalError,
///     interpreter::{evaluator::utils::operand_mismatch, lexer::Position, value::core::Value},
/// };
///
/// let err = operand_mismatch(BinaryOperator::Sub,
///                            &Value::from("a"),
///                            &Value::Bool(true),
///                            Position::new(2, 3));
///
/// assert_eq!(err.to_string(),
///            "Error on line 2, column 3: Type mismatch: cannot apply '-' to string and boolean.");
/// ```
#[must_use]
pub fn operand_mismatch(op: BinaryOperator,
                        left: &Value,
                        right: &Value,
                        position: Position)
                        -> EvalError {
    EvalError::TypeMismatch { details: format!("cannot apply '{op}' to {} and {}",
                                               left.type_name(),
                                               right.type_name()),
                              position }
}
