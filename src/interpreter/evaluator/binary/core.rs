use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::Position,
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending on
    /// the operator. Arithmetic operators use `eval_scalar_op`, relational
    /// and equality operators use `eval_comparison`, and logical operators
    /// call `eval_logic`.
    ///
    /// Both operands are already evaluated here; short-circuiting of `&&` and
    /// `||` happens before this function is reached.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Position of the operator, for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use darja::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, lexer::Position, value::core::Value},
    /// };
    ///
    /// let left = Value::Integer(3);
    /// let right = Value::Integer(4);
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Add, &left, &right, Position::new(1, 3));
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       position: Position)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };

        match op {
            Add | Sub | Mul | Div | Mod => Self::eval_scalar_op(op, left, right, position),

            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, left, right, position)
            },

            And | Or => Self::eval_logic(op, left, right, position),
        }
    }
}
