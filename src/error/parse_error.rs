use crate::{error::LexError, interpreter::lexer::Position};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a statement.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// Description of the token encountered.
        found:    String,
        /// What the parser was looking for.
        expected: &'static str,
        /// Where the token starts.
        position: Position,
    },
    /// The line (or input) ended where an operand or keyword was required.
    IncompleteExpression {
        /// What the parser was looking for.
        expected: &'static str,
        /// Where the line ended.
        position: Position,
    },
    /// An opening `(` or `{` was never closed, or a closing one never opened.
    UnmatchedDelimiter {
        /// The delimiter without a partner.
        delimiter: char,
        /// Where that delimiter appears.
        position:  Position,
    },
    /// Found extra tokens after a complete statement.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Where the extra token starts.
        position: Position,
    },
    /// `khlas` appeared somewhere other than alone on its own line.
    MisplacedSentinel {
        /// Where the keyword appears.
        position: Position,
    },
    /// A block was still open when the input or the session ended.
    UnterminatedBlock {
        /// Where the unclosed `{` appears.
        position: Position,
    },
    /// Parentheses, prefix operators, operator chains or blocks are nested
    /// deeper than the parser accepts.
    NestingTooDeep {
        /// Where the limit was crossed.
        position: Position,
    },
    /// The parser reached a token the lexer could not recognize.
    Lexical(LexError),
}

impl ParseError {
    /// Where the error occurred.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::IncompleteExpression { position, .. }
            | Self::UnmatchedDelimiter { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::MisplacedSentinel { position }
            | Self::UnterminatedBlock { position }
            | Self::NestingTooDeep { position } => *position,
            Self::Lexical(e) => e.position(),
        }
    }
}

impl From<LexError> for ParseError {
    fn from(value: LexError) -> Self {
        Self::Lexical(value)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { found,
                                    expected,
                                    position, } => {
                write!(f,
                       "Error on {position}: Unexpected token {found}, expected {expected}.")
            },
            Self::IncompleteExpression { expected, position } => {
                write!(f,
                       "Error on {position}: Incomplete expression, expected {expected}.")
            },
            Self::UnmatchedDelimiter { delimiter, position } => {
                write!(f, "Error on {position}: Unmatched '{delimiter}'.")
            },
            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Error on {position}: Extra tokens after statement. Check your input: {token}"),
            Self::MisplacedSentinel { position } => write!(f,
                                                           "Error on {position}: 'khlas' must stand alone on its own line."),
            Self::UnterminatedBlock { position } => {
                write!(f, "Error on {position}: Block opened here is never closed.")
            },
            Self::NestingTooDeep { position } => {
                write!(f, "Error on {position}: Expression is nested too deeply.")
            },
            Self::Lexical(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {}
