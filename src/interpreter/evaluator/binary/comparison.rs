use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            utils::operand_mismatch,
        },
        lexer::Position,
        value::core::Value,
    },
};

/// Maps an equality-style operator and a boolean equality result
/// to the final boolean value.
///
/// This function does not perform any comparison itself.
#[must_use]
pub fn equality_op_result(op: BinaryOperator, is_equal: bool) -> bool {
    match op {
        BinaryOperator::Equal => is_equal,
        BinaryOperator::NotEqual => !is_equal,
        _ => unreachable!("equality_op_result used with non equality operator"),
    }
}

/// Compares two values for equality.
///
/// Defined for every pair of values. Numbers compare by numeric value, so
/// `2 == 2.0` holds; an integer too large to convert exactly is compared
/// without rounding. Values of different non-numeric kinds are never equal.
///
/// ## Example
/// ```
/// use darja::interpreter::{evaluator::binary::comparison::values_equal, value::core::Value};
///
/// assert!(values_equal(&Value::Integer(2), &Value::Float(2.0)));
/// assert!(!values_equal(&Value::from("1"), &Value::Integer(1)));
/// assert!(values_equal(&Value::Unit, &Value::Unit));
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn values_equal(left: &Value, right: &Value) -> bool {
    use Value::{Bool, Float, Integer, Str, Unit};

    match (left, right) {
        (Integer(a), Integer(b)) => a == b,
        (Float(a), Float(b)) => a == b,
        (Integer(i), Float(f)) | (Float(f), Integer(i)) => integer_equals_float(*i, *f),
        (Bool(a), Bool(b)) => a == b,
        (Str(a), Str(b)) => a == b,
        (Unit, Unit) => true,
        _ => false,
    }
}

#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
fn integer_equals_float(i: i64, f: f64) -> bool {
    f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 && f as i64 == i
}

impl Evaluator {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// For `Equal` and `NotEqual`, any two values can be compared (see
    /// [`values_equal`]). Relational operators order numbers, promoting mixed
    /// operands to floats, and order strings lexicographically.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `position`: Position of the operator, for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use darja::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, lexer::Position, value::core::Value},
    /// };
    ///
    /// let a = Value::Float(3.0);
    /// let b = Value::Integer(5);
    ///
    /// let result = Evaluator::eval_comparison(BinaryOperator::Less, &a, &b, Position::new(1, 3));
    ///
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           position: Position)
                           -> EvalResult<Value> {
        if matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual) {
            return Ok(Value::Bool(equality_op_result(op, values_equal(left, right))));
        }

        let ordering = match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            _ if left.is_numeric() && right.is_numeric() => {
                left.as_float(position)?
                    .partial_cmp(&right.as_float(position)?)
            },
            _ => return Err(operand_mismatch(op, left, right, position)),
        };

        Ok(Value::Bool(ordering.is_some_and(|ordering| match op {
                                                BinaryOperator::Less => ordering == Ordering::Less,
                                                BinaryOperator::Greater => {
                                                    ordering == Ordering::Greater
                                                },
                                                BinaryOperator::LessEqual => {
                                                    ordering != Ordering::Greater
                                                },
                                                BinaryOperator::GreaterEqual => {
                                                    ordering != Ordering::Less
                                                },
                                                _ => unreachable!(),
                                            })))
    }
}
