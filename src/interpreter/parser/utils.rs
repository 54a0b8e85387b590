use std::iter::Peekable;

use crate::{
    error::{LexError, ParseError},
    interpreter::{
        lexer::{Position, Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Builds the error for a token the parser did not expect.
///
/// The error kind depends on what was found:
/// - an error token becomes the corresponding lexical error,
/// - a line or input terminator means the statement is incomplete,
/// - anything else is an unexpected token.
///
/// # Parameters
/// - `found`: The offending token, or `None` if the stream is exhausted.
/// - `expected`: Hint describing what would have been accepted.
///
/// # Example
/// ```
/// use darja::{
///     error::ParseError,
///     interpreter::{
///         lexer::{Position, Token, TokenKind},
///         parser::utils::unexpected,
///     },
/// };
///
/// let eol = Token::new(TokenKind::EndOfLine, "", Position::new(1, 8));
/// let err = unexpected(Some(&eol), "an expression");
///
/// assert!(matches!(err, ParseError::IncompleteExpression { .. }));
/// ```
#[must_use]
pub fn unexpected(found: Option<&Token>, expected: &'static str) -> ParseError {
    let Some(token) = found else {
        return ParseError::IncompleteExpression { expected,
                                                  position: Position::default() };
    };

    match token.kind {
        TokenKind::Error('"') => LexError::InvalidString { position: token.position }.into(),
        TokenKind::Error(character) => {
            LexError::UnrecognizedCharacter { character,
                                              position: token.position }.into()
        },
        TokenKind::EndOfLine | TokenKind::EndOfInput => {
            ParseError::IncompleteExpression { expected,
                                               position: token.position }
        },
        _ => ParseError::UnexpectedToken { found: token.describe(),
                                           expected,
                                           position: token.position },
    }
}

/// Consumes the next token if it has the given kind.
///
/// # Errors
/// Returns the error built by [`unexpected`] when the next token is of a
/// different kind. The token is not consumed in that case.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: &TokenKind,
                                                    expected: &'static str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    if let Some(token) = tokens.next_if(|token| token.kind == *kind) {
        return Ok(token);
    }
    Err(unexpected(tokens.peek().copied(), expected))
}

/// How many parentheses, prefix operators, call argument lists and blocks may
/// enclose each other.
pub const MAX_NESTING_DEPTH: usize = 64;

/// The largest number of operator nodes between an expression's root and its
/// deepest operand.
pub const MAX_EXPRESSION_HEIGHT: usize = 256;

/// Returns the nesting depth one level inside `depth`.
///
/// # Errors
/// `NestingTooDeep` at `position` once [`MAX_NESTING_DEPTH`] is reached.
pub(in crate::interpreter::parser) fn deeper(depth: usize, position: Position) -> ParseResult<usize> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { position });
    }
    Ok(depth + 1)
}

/// Skips any number of end-of-line tokens.
pub(in crate::interpreter::parser) fn skip_line_ends<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while tokens.next_if(|token| token.kind == TokenKind::EndOfLine)
                .is_some()
    {}
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is used by builtin call argument lists. It repeatedly calls
/// `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. Reaching
/// the end of the line before the closing token reports the opening delimiter
/// as unmatched.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g. `)`).
/// - `opening`: The opening delimiter and where it appears.
///
/// # Returns
/// A vector of parsed items.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &TokenKind,
    opening: (char, Position))
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut items = Vec::new();
    if tokens.next_if(|token| token.kind == *closing).is_some() {
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some(Token { kind: TokenKind::Comma, .. }) => {
                tokens.next();
            },
            Some(token) if token.kind == *closing => {
                tokens.next();
                break;
            },
            Some(token) if token.kind.is_terminator() => {
                return Err(ParseError::UnmatchedDelimiter { delimiter: opening.0,
                                                            position:  opening.1, });
            },
            other => return Err(unexpected(other.copied(), "',' or ')'")),
        }
    }
    Ok(items)
}
