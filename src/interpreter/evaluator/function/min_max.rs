use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, lexer::Position, value::core::Value},
};

/// Computes the minimum or maximum of one or more numeric values.
///
/// - If every argument is an integer, the result is an integer.
/// - Otherwise all arguments are promoted to floats and the result is a
///   float.
///
/// The operation is selected by the `name` parameter, which must be `"min"` or
/// `"max"`. Any non-numeric argument produces a `TypeMismatch` error.
///
/// # Parameters
/// - `name`: Either `"min"` or `"max"`.
/// - `args`: Slice containing at least one argument.
/// - `position`: Position of the call, for error reporting.
///
/// # Returns
/// `Value::Integer` or `Value::Float` depending on input types.
///
/// # Example
/// ```
/// use darja::interpreter::{evaluator::function::min_max::min_max, lexer::Position, value::core::Value};
///
/// let at = Position::new(1, 1);
///
/// let r = min_max("min", &[Value::Integer(3), Value::Integer(7), Value::Integer(-1)], at).unwrap();
/// assert_eq!(r, Value::Integer(-1));
///
/// let r = min_max("max", &[Value::Float(2.5), Value::Integer(1)], at).unwrap();
/// assert_eq!(r, Value::Float(2.5));
/// ```
pub fn min_max(name: &str, args: &[Value], position: Position) -> EvalResult<Value> {
    if let Some(bad) = args.iter().find(|arg| !arg.is_numeric()) {
        return Err(EvalError::TypeMismatch { details: format!("{name}() expects numbers, found {}",
                                                              bad.type_name()),
                                             position });
    }

    let integers: Option<Vec<i64>> = args.iter()
                                         .map(|arg| match arg {
                                             Value::Integer(n) => Some(*n),
                                             _ => None,
                                         })
                                         .collect();

    if let Some(integers) = integers {
        let value = if name == "min" {
            integers.into_iter().min()
        } else {
            integers.into_iter().max()
        };
        return value.map(Value::Integer)
                    .ok_or_else(|| empty_arguments(name, position));
    }

    let floats = args.iter()
                     .map(|arg| arg.as_float(position))
                     .collect::<EvalResult<Vec<_>>>()?;
    let value = floats.into_iter().reduce(|acc, x| {
                                      if name == "min" { acc.min(x) } else { acc.max(x) }
                                  });
    value.map(Value::Float)
         .ok_or_else(|| empty_arguments(name, position))
}

fn empty_arguments(name: &str, position: Position) -> EvalError {
    EvalError::ArgumentCountMismatch { name: name.to_string(),
                                       expected: "at least 1".to_string(),
                                       found: 0,
                                       position }
}
