use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, lexer::Position, value::core::Value},
    util::num::{f64_to_i64_truncated, usize_to_i64_checked},
};

/// Builds the `TypeMismatch` error for a builtin that received an argument of
/// the wrong type.
fn wrong_type(function: &str, expected: &str, found: &Value, position: Position) -> EvalError {
    EvalError::TypeMismatch { details: format!("{function}() expects {expected}, found {}",
                                               found.type_name()),
                              position }
}

/// Computes the absolute value of a number.
///
/// Integers stay integers; the absolute value of `i64::MIN` overflows.
///
/// # Example
/// ```
/// use darja::interpreter::{evaluator::function::builtin::abs, lexer::Position, value::core::Value};
///
/// let at = Position::new(1, 1);
/// assert_eq!(abs(&[Value::Integer(-4)], at).unwrap(), Value::Integer(4));
/// assert_eq!(abs(&[Value::Float(-2.5)], at).unwrap(), Value::Float(2.5));
/// ```
pub fn abs(args: &[Value], position: Position) -> EvalResult<Value> {
    match &args[0] {
        Value::Integer(n) => n.checked_abs()
                              .map(Value::Integer)
                              .ok_or(EvalError::Overflow { position }),
        Value::Float(r) => Ok(Value::Float(r.abs())),
        other => Err(wrong_type("abs", "a number", other, position)),
    }
}

/// Computes the square root of a non-negative number.
///
/// The result is always a float. Negative inputs are rejected with
/// `InvalidArgument`.
///
/// # Example
/// ```
/// use darja::interpreter::{evaluator::function::builtin::sqrt, lexer::Position, value::core::Value};
///
/// let at = Position::new(1, 1);
/// assert_eq!(sqrt(&[Value::Integer(9)], at).unwrap(), Value::Float(3.0));
/// assert!(sqrt(&[Value::Float(-1.0)], at).is_err());
/// ```
pub fn sqrt(args: &[Value], position: Position) -> EvalResult<Value> {
    if !args[0].is_numeric() {
        return Err(wrong_type("sqrt", "a number", &args[0], position));
    }
    let x = args[0].as_float(position)?;
    if x < 0.0 {
        return Err(EvalError::InvalidArgument { details: format!("cannot take the square root of {}",
                                                                 args[0]),
                                                position });
    }
    Ok(Value::Float(x.sqrt()))
}

/// Converts a value to an integer.
///
/// - Floats are truncated toward zero.
/// - Strings are parsed as decimal integers, ignoring surrounding whitespace.
/// - `sah` and `ghalet` become `1` and `0`.
///
/// # Example
/// ```
/// use darja::interpreter::{evaluator::function::builtin::int, lexer::Position, value::core::Value};
///
/// let at = Position::new(1, 1);
/// assert_eq!(int(&[Value::Float(-2.9)], at).unwrap(), Value::Integer(-2));
/// assert_eq!(int(&[Value::from(" 42 ")], at).unwrap(), Value::Integer(42));
/// assert!(int(&[Value::from("4x")], at).is_err());
/// ```
pub fn int(args: &[Value], position: Position) -> EvalResult<Value> {
    match &args[0] {
        Value::Integer(n) => Ok(Value::Integer(*n)),
        Value::Float(r) => f64_to_i64_truncated(*r, position).map(Value::Integer),
        Value::Bool(b) => Ok(Value::Integer(i64::from(*b))),
        Value::Str(s) => s.trim().parse::<i64>().map(Value::Integer).map_err(|_| {
                             EvalError::InvalidArgument { details: format!("'{s}' is not an integer"),
                                                          position }
                         }),
        Value::Unit => Err(wrong_type("int", "a number, string or boolean", &args[0], position)),
    }
}

/// Converts a value to a float.
///
/// Integers are converted exactly or fail with `Overflow`; strings are parsed
/// as decimal numbers.
///
/// # Example
/// ```
/// use darja::interpreter::{evaluator::function::builtin::float, lexer::Position, value::core::Value};
///
/// let at = Position::new(1, 1);
/// assert_eq!(float(&[Value::Integer(3)], at).unwrap(), Value::Float(3.0));
/// assert_eq!(float(&[Value::from("0.5")], at).unwrap(), Value::Float(0.5));
/// ```
pub fn float(args: &[Value], position: Position) -> EvalResult<Value> {
    match &args[0] {
        Value::Integer(_) | Value::Float(_) => args[0].as_float(position).map(Value::Float),
        Value::Str(s) => match s.trim().parse::<f64>() {
            Ok(r) if r.is_finite() => Ok(Value::Float(r)),
            _ => Err(EvalError::InvalidArgument { details: format!("'{s}' is not a number"),
                                                  position }),
        },
        other => Err(wrong_type("float", "a number or string", other, position)),
    }
}

/// Renders any value as a string, exactly as `kteb` would print it.
///
/// # Example
/// ```
/// use darja::interpreter::{evaluator::function::builtin::str, lexer::Position, value::core::Value};
///
/// let at = Position::new(1, 1);
/// assert_eq!(str(&[Value::Float(2.0)], at).unwrap(), Value::from("2.0"));
/// assert_eq!(str(&[Value::Bool(true)], at).unwrap(), Value::from("sah"));
/// ```
#[allow(clippy::unnecessary_wraps)]
pub fn str(args: &[Value], _position: Position) -> EvalResult<Value> {
    Ok(Value::Str(args[0].to_string()))
}

/// Returns the number of characters in a string.
///
/// # Example
/// ```
/// use darja::interpreter::{evaluator::function::builtin::len, lexer::Position, value::core::Value};
///
/// let at = Position::new(1, 1);
/// assert_eq!(len(&[Value::from("salam")], at).unwrap(), Value::Integer(5));
/// assert!(len(&[Value::Integer(5)], at).is_err());
/// ```
pub fn len(args: &[Value], position: Position) -> EvalResult<Value> {
    match &args[0] {
        Value::Str(s) => usize_to_i64_checked(s.chars().count(), position).map(Value::Integer),
        other => Err(wrong_type("len", "a string", other, position)),
    }
}

/// Returns the name of a value's type as a string.
///
/// # Example
/// ```
/// use darja::interpreter::{evaluator::function::builtin::type_of, lexer::Position, value::core::Value};
///
/// let at = Position::new(1, 1);
/// assert_eq!(type_of(&[Value::Float(1.0)], at).unwrap(), Value::from("float"));
/// ```
#[allow(clippy::unnecessary_wraps)]
pub fn type_of(args: &[Value], _position: Position) -> EvalResult<Value> {
    Ok(Value::from(args[0].type_name()))
}
