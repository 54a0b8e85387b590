use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::Position,
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a logical operation between two boolean values.
    ///
    /// The operands are converted to booleans using `as_bool`, so anything
    /// other than `sah` or `ghalet` is a type mismatch. Supported operators
    /// are logical AND and OR.
    ///
    /// # Parameters
    /// - `op`: The logical operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Position of the operator, for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean.
    ///
    /// # Example
    /// ```
    /// use darja::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, lexer::Position, value::core::Value},
    /// };
    ///
    /// let a = Value::Bool(true);
    /// let b = Value::Bool(false);
    ///
    /// let result = Evaluator::eval_logic(BinaryOperator::Or, &a, &b, Position::new(1, 3));
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// assert!(Evaluator::eval_logic(BinaryOperator::And, &a, &Value::Integer(1), Position::new(1, 3)).is_err());
    /// ```
    pub fn eval_logic(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      position: Position)
                      -> EvalResult<Value> {
        use BinaryOperator::{And, Or};

        let left = left.as_bool(position)?;
        let right = right.as_bool(position)?;
        match op {
            And => Ok(Value::Bool(left && right)),
            Or => Ok(Value::Bool(left || right)),
            _ => unreachable!(),
        }
    }
}
