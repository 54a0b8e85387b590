use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            utils::operand_mismatch,
        },
        lexer::Position,
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates an arithmetic operation.
    ///
    /// The function handles integer and float operands. Mixed types are
    /// promoted to floats. Division and modulo by zero are checked explicitly
    /// for both numeric types. `+` on two strings concatenates them. The
    /// operator must be one of `Add`, `Sub`, `Mul`, `Div` or `Mod`.
    ///
    /// # Errors
    /// - `Overflow` when integer arithmetic leaves the `i64` range, when an
    ///   integer operand cannot be promoted exactly, or when a float result is
    ///   not finite.
    /// - `DivisionByZero` for a zero divisor.
    /// - `TypeMismatch` for any other combination of operand types.
    ///
    /// # Example
    /// ```
    /// use darja::{
    ///     ast::BinaryOperator,
    ///     error::EvalError,
    ///     interpreter::{evaluator::core::Evaluator, lexer::Position, value::core::Value},
    /// };
    ///
    /// let at = Position::new(1, 1);
    ///
    /// let result = Evaluator::eval_scalar_op(BinaryOperator::Mul,
    ///                                        &Value::Float(1.5),
    ///                                        &Value::Integer(2),
    ///                                        at).unwrap();
    /// assert_eq!(result, Value::Float(3.0));
    ///
    /// let err = Evaluator::eval_scalar_op(BinaryOperator::Add,
    ///                                     &Value::Integer(i64::MAX),
    ///                                     &Value::Integer(1),
    ///                                     at).unwrap_err();
    /// assert!(matches!(err, EvalError::Overflow { .. }));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          position: Position)
                          -> EvalResult<Value> {
        use Value::{Float, Integer, Str};

        match (left, right) {
            (Integer(a), Integer(b)) => integer_op(op, *a, *b, position).map(Integer),
            (Str(a), Str(b)) if op == BinaryOperator::Add => Ok(Str(format!("{a}{b}"))),
            _ if left.is_numeric() && right.is_numeric() => {
                let left = left.as_float(position)?;
                let right = right.as_float(position)?;
                float_op(op, left, right, position).map(Float)
            },
            _ => Err(operand_mismatch(op, left, right, position)),
        }
    }
}

fn integer_op(op: BinaryOperator, a: i64, b: i64, position: Position) -> EvalResult<i64> {
    use BinaryOperator::{Add, Div, Mod, Mul, Sub};

    let result = match op {
        Add => a.checked_add(b),
        Sub => a.checked_sub(b),
        Mul => a.checked_mul(b),
        Div | Mod if b == 0 => return Err(EvalError::DivisionByZero { position }),
        Div => a.checked_div(b),
        Mod => a.checked_rem(b),
        _ => unreachable!("integer_op used with non arithmetic operator"),
    };
    result.ok_or(EvalError::Overflow { position })
}

fn float_op(op: BinaryOperator, a: f64, b: f64, position: Position) -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mod, Mul, Sub};

    let result = match op {
        Add => a + b,
        Sub => a - b,
        Mul => a * b,
        Div | Mod if b == 0.0 => return Err(EvalError::DivisionByZero { position }),
        Div => a / b,
        Mod => a % b,
        _ => unreachable!("float_op used with non arithmetic operator"),
    };
    if !result.is_finite() && a.is_finite() && b.is_finite() {
        return Err(EvalError::Overflow { position });
    }
    Ok(result)
}
