use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Position, Token, TokenKind},
        parser::{
            core::{ParseResult, parse_conditional, parse_expression, parse_loop},
            utils::{skip_line_ends, unexpected},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - the sentinel `khlas`,
/// - a print statement (`kteb a, b`),
/// - a conditional (`ila ... { }`),
/// - a loop (`mazal ... { }`),
/// - an assignment (`x = ...`),
/// - an expression used as a statement.
///
/// The statement's position is taken from its first token.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of the statement.
/// - `depth`: How many blocks enclose the statement; `0` at top level.
///
/// # Returns
/// A parsed [`Statement`] node. Tokens after the statement are left in the
/// stream; see [`parse_line`] for whole-line parsing.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(first) = tokens.peek().copied() else {
        return Err(unexpected(None, "a statement"));
    };
    let position = first.position;

    match first.kind {
        TokenKind::Khlas => {
            tokens.next();
            parse_termination(tokens, position)
        },
        TokenKind::Kteb => {
            tokens.next();
            parse_print(tokens, position, depth)
        },
        TokenKind::Ila => {
            tokens.next();
            parse_conditional(tokens, position, depth)
        },
        TokenKind::Mazal => {
            tokens.next();
            parse_loop(tokens, position, depth)
        },
        TokenKind::Wila => Err(unexpected(Some(first), "a statement")),
        _ => {
            if let Some(statement) = parse_assignment(tokens, depth)? {
                return Ok(statement);
            }
            let expr = parse_expression(tokens, depth)?;
            Ok(Statement::Expression { expr, position })
        },
    }
}

/// Parses the tokens of one input line (or one complete block) into a
/// statement.
///
/// This never fails: when the tokens do not form exactly one statement, the
/// returned statement is [`Statement::Invalid`] carrying the first error.
/// Line ends before and after the statement are allowed.
///
/// # Example
/// ```
/// use darja::{
///     ast::Statement,
///     error::ParseError,
///     interpreter::{lexer::tokenize, parser::statement::parse_line},
/// };
///
/// let tokens: Vec<_> = tokenize("khlas", 1).collect();
/// assert!(matches!(parse_line(&tokens), Statement::Termination { .. }));
///
/// let tokens: Vec<_> = tokenize("x = 1 +", 1).collect();
/// assert!(matches!(parse_line(&tokens),
///                  Statement::Invalid { error: ParseError::IncompleteExpression { .. } }));
/// ```
#[must_use]
pub fn parse_line(tokens: &[Token]) -> Statement {
    let mut tokens = tokens.iter().peekable();
    skip_line_ends(&mut tokens);

    let result = parse_statement(&mut tokens, 0).and_then(|statement| {
                                                 ensure_end(&mut tokens)?;
                                                 Ok(statement)
                                             });

    result.unwrap_or_else(|error| Statement::Invalid { error })
}

/// Checks that nothing but line ends follows a complete statement.
///
/// # Errors
/// - `MisplacedSentinel` if the first extra token is `khlas`.
/// - `Lexical` if it is an unrecognized character.
/// - `UnexpectedTrailingTokens` for any other extra token.
fn ensure_end<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a Token> + Clone
{
    skip_line_ends(tokens);
    match tokens.peek() {
        None | Some(Token { kind: TokenKind::EndOfInput, .. }) => Ok(()),
        Some(Token { kind: TokenKind::Khlas,
                     position,
                     .. }) => Err(ParseError::MisplacedSentinel { position: *position }),
        Some(token) if matches!(token.kind, TokenKind::Error(_)) => {
            Err(unexpected(Some(*token), "end of line"))
        },
        Some(token) => Err(ParseError::UnexpectedTrailingTokens { token:    token.describe(),
                                                                  position: token.position, }),
    }
}

/// Parses the rest of a line starting with `khlas`.
///
/// The sentinel only terminates the session when nothing else is on its line.
fn parse_termination<'a, I>(tokens: &mut Peekable<I>,
                            position: Position)
                            -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.peek() {
        None => Ok(Statement::Termination { position }),
        Some(token) if token.kind.is_terminator() => Ok(Statement::Termination { position }),
        Some(_) => Err(ParseError::MisplacedSentinel { position }),
    }
}

/// Parses a print statement.
///
/// Syntax: `kteb <expression> ("," <expression>)*`
///
/// # Errors
/// `IncompleteExpression` if `kteb` is not followed by any expression.
fn parse_print<'a, I>(tokens: &mut Peekable<I>,
                      position: Position,
                      depth: usize)
                      -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut values = vec![parse_expression(tokens, depth)?];
    while tokens.next_if(|token| token.kind == TokenKind::Comma)
                .is_some()
    {
        values.push(parse_expression(tokens, depth)?);
    }
    Ok(Statement::Print { values, position })
}

/// Parses an assignment statement.
///
/// An assignment has the form: `<identifier> = <expression>`
///
/// The parser looks ahead one token to check for `=` after the identifier. If
/// the pattern does not match, no tokens are consumed and `Ok(None)` is
/// returned so the caller can parse an expression instead.
///
/// # Returns
/// - `Ok(Some(Statement::Assignment))` if an assignment is parsed,
/// - `Ok(None)` if the input is not an assignment.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>,
                           depth: usize)
                           -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut lookahead = tokens.clone();
    let (Some(Token { kind: TokenKind::Identifier(name),
                      position,
                      .. }),
         Some(Token { kind: TokenKind::Equals, .. })) = (lookahead.next(), lookahead.next())
    else {
        return Ok(None);
    };

    tokens.next();
    tokens.next();
    let value = parse_expression(tokens, depth)?;

    Ok(Some(Statement::Assignment { name: name.clone(),
                                    value,
                                    position: *position }))
}
