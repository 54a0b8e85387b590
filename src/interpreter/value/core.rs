use crate::{
    ast::LiteralValue,
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, lexer::Position},
    util::num::i64_to_f64_checked,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, builtin results, and conditions.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Float(f64),
    /// A boolean value (`sah` or `ghalet`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) or logical
    /// operations (`!`, `&&`, `||`). The only type accepted as a condition of
    /// `ila` and `mazal`.
    Bool(bool),
    /// A string.
    Str(String),
    /// The unit value `walou`.
    Unit,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl Value {
    /// The user-facing name of this value's type.
    ///
    /// # Example
    /// ```
    /// use darja::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "integer");
    /// assert_eq!(Value::Unit.type_name(), "walou");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::Str(_) => "string",
            Self::Unit => "walou",
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Float` and `Value::Integer`. For integers, conversion
    /// fails with `Overflow` if the value cannot be represented exactly as
    /// `f64`.
    ///
    /// # Parameters
    /// - `position`: Source position for error reporting.
    ///
    /// # Example
    /// ```
    /// use darja::interpreter::{lexer::Position, value::core::Value};
    ///
    /// let x = Value::Integer(10);
    /// assert_eq!(x.as_float(Position::default()).unwrap(), 10.0);
    /// assert!(Value::Bool(true).as_float(Position::default()).is_err());
    /// ```
    pub fn as_float(&self, position: Position) -> EvalResult<f64> {
        match self {
            Self::Float(r) => Ok(*r),
            Self::Integer(n) => i64_to_f64_checked(*n, EvalError::Overflow { position }),
            _ => Err(EvalError::TypeMismatch { details: format!("expected a number, found {}",
                                                                self.type_name()),
                                               position }),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Truthiness is defined only for booleans: conditions of `ila` and
    /// `mazal` and operands of logical operators go through this check.
    ///
    /// # Parameters
    /// - `position`: Source position for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The boolean value.
    /// - `Err(EvalError::TypeMismatch)`: If not boolean.
    pub fn as_bool(&self, position: Position) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(EvalError::TypeMismatch { details: format!("expected a boolean, found {}",
                                                                self.type_name()),
                                               position }),
        }
    }

    /// Returns `true` if the value is [`Value::Integer`] or [`Value::Float`].
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Float(..))
    }

    /// Converts a literal from the AST into a value.
    ///
    /// Integer literals are kept as text in the AST; this is where a literal
    /// too large for `i64` becomes an `Overflow` error.
    ///
    /// # Example
    /// ```
    /// use darja::{
    ///     ast::LiteralValue,
    ///     interpreter::{lexer::Position, value::core::Value},
    /// };
    ///
    /// let big = LiteralValue::Integer("99999999999999999999".into());
    /// assert!(Value::from_literal(&big, Position::default()).is_err());
    /// ```
    pub fn from_literal(literal: &LiteralValue, position: Position) -> EvalResult<Self> {
        match literal {
            LiteralValue::Integer(digits) => digits.parse::<i64>()
                                                   .map(Self::Integer)
                                                   .map_err(|_| EvalError::Overflow { position }),
            LiteralValue::Float(f) => Ok(Self::Float(*f)),
            LiteralValue::Bool(b) => Ok(Self::Bool(*b)),
            LiteralValue::Str(s) => Ok(Self::Str(s.clone())),
            LiteralValue::Unit => Ok(Self::Unit),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Whole floats keep a fractional digit so they never read as
            // integers.
            Self::Float(r) if r.is_finite() && r.fract() == 0.0 => {
                write!(f, "{r:.1}")
            },
            Self::Float(r) => write!(f, "{r}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(true) => write!(f, "sah"),
            Self::Bool(false) => write!(f, "ghalet"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Unit => write!(f, "walou"),
        }
    }
}
