use crate::{error::ParseError, interpreter::lexer::Position};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// Tried to use a variable that was never assigned.
    UnboundVariable {
        /// The name of the variable.
        name:     String,
        /// Where the variable is referenced.
        position: Position,
    },
    /// An operation received values of the wrong type.
    TypeMismatch {
        /// Details about the mismatch.
        details:  String,
        /// Where the operation appears.
        position: Position,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero {
        /// Where the operator appears.
        position: Position,
    },
    /// Arithmetic left the range of its numeric type.
    Overflow {
        /// Where the operation appears.
        position: Position,
    },
    /// Called a function that does not exist.
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// Where the call appears.
        position: Position,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// A description of the accepted counts, e.g. `1` or `at least 1`.
        expected: String,
        /// How many arguments were given.
        found:    usize,
        /// Where the call appears.
        position: Position,
    },
    /// An argument had the right type but an unusable value.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details:  String,
        /// Where the call appears.
        position: Position,
    },
    /// A `mazal` loop ran more iterations than the configured limit.
    IterationLimit {
        /// The configured limit.
        limit:    u64,
        /// Where the loop starts.
        position: Position,
    },
    /// A statement that failed to parse was handed to the evaluator.
    Unparsed(ParseError),
}

impl EvalError {
    /// Where the error occurred.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnboundVariable { position, .. }
            | Self::TypeMismatch { position, .. }
            | Self::DivisionByZero { position }
            | Self::Overflow { position }
            | Self::UnknownFunction { position, .. }
            | Self::ArgumentCountMismatch { position, .. }
            | Self::InvalidArgument { position, .. }
            | Self::IterationLimit { position, .. } => *position,
            Self::Unparsed(e) => e.position(),
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundVariable { name, position } => {
                write!(f, "Error on {position}: Unbound variable '{name}'.")
            },
            Self::TypeMismatch { details, position } => {
                write!(f, "Error on {position}: Type mismatch: {details}.")
            },
            Self::DivisionByZero { position } => {
                write!(f, "Error on {position}: Division by zero.")
            },
            Self::Overflow { position } => write!(f,
                                                  "Error on {position}: Numeric overflow while trying to compute result."),
            Self::UnknownFunction { name, position } => {
                write!(f, "Error on {position}: Unknown function '{name}'.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          position, } => write!(f,
                                                                "Error on {position}: '{name}' takes {expected} argument(s) but {found} were given."),
            Self::InvalidArgument { details, position } => {
                write!(f, "Error on {position}: Invalid argument: {details}.")
            },
            Self::IterationLimit { limit, position } => write!(f,
                                                               "Error on {position}: Loop exceeded the limit of {limit} iterations."),
            Self::Unparsed(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unparsed(e) => Some(e),
            _ => None,
        }
    }
}
