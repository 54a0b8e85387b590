/// Lexical errors.
///
/// Raised when the lexer meets a character the language does not recognize.
/// The lexer itself never fails; it hands the parser an error token, and the
/// parser turns that token into a [`LexError`].
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while parsing one line (or block)
/// of source code: unexpected tokens, incomplete expressions, unbalanced
/// delimiters and a misplaced sentinel.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while a parsed statement is
/// evaluated, such as division by zero, type mismatches, unbound variables,
/// or integer overflow.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

use crate::interpreter::lexer::Position;

/// Any failure the session reports for a line.
///
/// Every kind is local and recoverable: the session prints the diagnostic and
/// continues with the next line.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The line could not be parsed (including lexical errors).
    Parse(ParseError),
    /// The statement was parsed but failed while running.
    Eval(EvalError),
}

impl Diagnostic {
    /// Where the failure happened.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Parse(e) => e.position(),
            Self::Eval(e) => e.position(),
        }
    }
}

impl From<ParseError> for Diagnostic {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<EvalError> for Diagnostic {
    fn from(value: EvalError) -> Self {
        Self::Eval(value)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Diagnostic {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
