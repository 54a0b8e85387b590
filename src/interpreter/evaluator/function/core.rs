use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            function::{builtin, min_max},
        },
        lexer::Position,
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the position
/// of the call. It returns a value wrapped in `EvalResult`.
type BuiltinFn = fn(&[Value], Position) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "abs"   => { arity: Arity::Exact(1), func: builtin::abs },
    "sqrt"  => { arity: Arity::Exact(1), func: builtin::sqrt },
    "int"   => { arity: Arity::Exact(1), func: builtin::int },
    "float" => { arity: Arity::Exact(1), func: builtin::float },
    "str"   => { arity: Arity::Exact(1), func: builtin::str },
    "len"   => { arity: Arity::Exact(1), func: builtin::len },
    "type"  => { arity: Arity::Exact(1), func: builtin::type_of },
    "min"   => { arity: Arity::AtLeast(1), func: |args, position| min_max::min_max("min", args, position) },
    "max"   => { arity: Arity::AtLeast(1), func: |args, position| min_max::min_max("max", args, position) },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
        }
    }

    /// Describes the accepted counts for diagnostics.
    fn describe(self) -> String {
        match self {
            Self::Exact(m) => m.to_string(),
            Self::AtLeast(m) => format!("at least {m}"),
        }
    }
}

impl Evaluator {
    /// Evaluates a builtin function call.
    ///
    /// The name is looked up in the builtin table; the argument count is
    /// verified before the builtin runs.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arg_vals`: Evaluated argument values.
    /// - `position`: Position of the call, for error reporting.
    ///
    /// # Returns
    /// The function result or an error if lookup or arity fails.
    ///
    /// # Example
    /// ```
    /// use darja::{
    ///     error::EvalError,
    ///     interpreter::{evaluator::core::Evaluator, lexer::Position, value::core::Value},
    /// };
    ///
    /// let at = Position::new(1, 1);
    ///
    /// let v = Evaluator::eval_function("max", &[Value::Integer(2), Value::Integer(9)], at);
    /// assert_eq!(v.unwrap(), Value::Integer(9));
    ///
    /// let err = Evaluator::eval_function("sqrt", &[], at).unwrap_err();
    /// assert!(matches!(err, EvalError::ArgumentCountMismatch { found: 0, .. }));
    ///
    /// let err = Evaluator::eval_function("nope", &[], at).unwrap_err();
    /// assert!(matches!(err, EvalError::UnknownFunction { .. }));
    /// ```
    pub fn eval_function(name: &str, arg_vals: &[Value], position: Position) -> EvalResult<Value> {
        let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) else {
            return Err(EvalError::UnknownFunction { name: name.to_string(),
                                                    position });
        };

        if !builtin.arity.check(arg_vals.len()) {
            return Err(EvalError::ArgumentCountMismatch { name: name.to_string(),
                                                          expected: builtin.arity.describe(),
                                                          found: arg_vals.len(),
                                                          position });
        }
        (builtin.func)(arg_vals, position)
    }
}

/// Returns `true` if `name` refers to a builtin function.
///
/// ## Example
/// ```
/// use darja::interpreter::evaluator::function::core::is_builtin;
///
/// assert!(is_builtin("len"));
/// assert!(!is_builtin("kteb"));
/// ```
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}
