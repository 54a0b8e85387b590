use crate::{
    ast::UnaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::Position,
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation for integers and floats. Negating
    ///   `i64::MIN` is an overflow.
    /// - `Not`: boolean negation; the operand must be a boolean.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `position`: Position of the operator, for error reporting.
    ///
    /// # Example
    /// ```
    /// use darja::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, lexer::Position, value::core::Value},
    /// };
    ///
    /// let at = Position::new(1, 1);
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Negate, &Value::Integer(5), at).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Not, &Value::Bool(false), at).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    ///
    /// assert!(Evaluator::eval_unary(UnaryOperator::Negate, &Value::Integer(i64::MIN), at).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, position: Position) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Integer(n) => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or(EvalError::Overflow { position }),
                Value::Float(r) => Ok(Value::Float(-r)),
                _ => Err(EvalError::TypeMismatch { details: format!("cannot negate a {}",
                                                                    value.type_name()),
                                                   position }),
            },
            UnaryOperator::Not => Ok(Value::Bool(!value.as_bool(position)?)),
        }
    }
}
