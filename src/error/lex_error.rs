use crate::interpreter::lexer::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// A character outside the language's alphabet.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Where the character appears.
        position:  Position,
    },
    /// A string literal that is not closed or uses an unknown escape.
    InvalidString {
        /// Where the literal starts.
        position: Position,
    },
}

impl LexError {
    /// Where the error occurred.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnrecognizedCharacter { position, .. } | Self::InvalidString { position } => {
                *position
            },
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character, position } => {
                write!(f,
                       "Error on {position}: Unrecognized character '{}'.",
                       character.escape_default())
            },
            Self::InvalidString { position } => write!(f,
                                                       "Error on {position}: Unterminated string or unknown escape sequence."),
        }
    }
}

impl std::error::Error for LexError {}
