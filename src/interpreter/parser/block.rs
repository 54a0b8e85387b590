use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{deeper, expect, skip_line_ends, unexpected},
        },
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements separated by line ends.
/// Parsing continues until the matching `}` token is encountered. Leading and
/// trailing line ends inside the block are ignored, and the last statement may
/// share its line with the closing brace.
///
/// Grammar: `block := "{" EOL* (statement EOL+)* statement? EOL* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
/// - `depth`: Nesting depth of the statement owning the block; its
///   statements are parsed one level deeper.
///
/// # Returns
/// The statements of the block, in order.
///
/// # Errors
/// - `UnexpectedToken` if the block does not start with `{`.
/// - `UnterminatedBlock` if the tokens run out before the closing brace.
/// - `MisplacedSentinel` if `khlas` is used as a statement inside the block.
/// - `NestingTooDeep` if blocks are nested too deeply.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let open = expect(tokens, &TokenKind::LBrace, "'{'")?.position;
    let depth = deeper(depth, open)?;
    let mut statements = Vec::new();

    loop {
        skip_line_ends(tokens);

        match tokens.peek().map(|token| &token.kind) {
            Some(TokenKind::RBrace) => {
                tokens.next();
                break;
            },
            None | Some(TokenKind::EndOfInput) => {
                return Err(ParseError::UnterminatedBlock { position: open });
            },
            _ => {},
        }

        let statement = parse_statement(tokens, depth)?;
        if let Statement::Termination { position } = statement {
            return Err(ParseError::MisplacedSentinel { position });
        }
        statements.push(statement);

        match tokens.peek().map(|token| &token.kind) {
            Some(TokenKind::EndOfLine | TokenKind::RBrace) => {},
            None | Some(TokenKind::EndOfInput) => {
                return Err(ParseError::UnterminatedBlock { position: open });
            },
            Some(_) => return Err(unexpected(tokens.peek().copied(), "end of line or '}'")),
        }
    }

    Ok(statements)
}
