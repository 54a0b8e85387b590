use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{deeper, parse_comma_separated, unexpected},
        },
    },
};

/// Parses unary expressions.
///
/// Handles prefix operators:
/// - `-` for arithmetic negation
/// - `!` for logical NOT
///
/// Unary operators are right-associative and apply to the result of
/// another unary expression, so `--x` and `!!b` are valid.
///
/// The rule is: `unary := ("-" | "!") unary | primary`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Nesting depth of the expression. Every prefix operator adds
///   one level.
///
/// # Returns
/// An `Expr::UnaryOp` node or the underlying primary expression.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let op = match tokens.peek().map(|token| &token.kind) {
        Some(TokenKind::Minus) => UnaryOperator::Negate,
        Some(TokenKind::Bang) => UnaryOperator::Not,
        _ => return parse_primary(tokens, depth),
    };
    let position = tokens.next().map(|token| token.position).unwrap_or_default();
    let expr = parse_unary(tokens, deeper(depth, position)?)?;

    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       position })
}

/// Parses primary expressions.
///
/// Primary expressions are:
/// - literals (`42`, `3.5`, `"salam"`, `sah`, `ghalet`, `walou`),
/// - variable references,
/// - builtin calls such as `max(a, b)`,
/// - parenthesized expressions.
///
/// # Errors
/// - `MisplacedSentinel` if `khlas` appears inside an expression.
/// - `IncompleteExpression` if the line ends where an operand is required.
/// - `UnexpectedToken` for any other token that cannot start an expression.
/// - `NestingTooDeep` if a grouping or argument list is nested too deeply.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.peek().copied() else {
        return Err(unexpected(None, "an expression"));
    };
    let position = token.position;

    let value = match &token.kind {
        TokenKind::Integer(digits) => LiteralValue::Integer(digits.clone()),
        TokenKind::Float(value) => LiteralValue::Float(*value),
        TokenKind::Str(text) => LiteralValue::Str(text.clone()),
        TokenKind::Bool(value) => LiteralValue::Bool(*value),
        TokenKind::Walou => LiteralValue::Unit,
        TokenKind::Identifier(_) => return parse_identifier_or_call(tokens, depth),
        TokenKind::LParen => return parse_grouping(tokens, depth),
        TokenKind::Khlas => return Err(ParseError::MisplacedSentinel { position }),
        _ => return Err(unexpected(Some(token), "an expression")),
    };
    tokens.next();

    Ok(Expr::Literal { value, position })
}

/// Parses a variable reference or a builtin call.
///
/// An identifier directly followed by `(` is a call; its arguments are a
/// comma-separated list of expressions.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(Token { kind: TokenKind::Identifier(name),
                     position,
                     .. }) = tokens.next()
    else {
        return Err(unexpected(tokens.peek().copied(), "an identifier"));
    };

    let Some(open) = tokens.next_if(|token| token.kind == TokenKind::LParen) else {
        return Ok(Expr::Variable { name:     name.clone(),
                                   position: *position, });
    };

    let depth = deeper(depth, open.position)?;
    let arguments = parse_comma_separated(tokens,
                                          |tokens| parse_expression(tokens, depth),
                                          &TokenKind::RParen,
                                          ('(', open.position))?;

    Ok(Expr::Call { name: name.clone(),
                    arguments,
                    position: *position })
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// Parentheses only affect precedence; the inner expression is returned as
/// is.
///
/// # Errors
/// `UnmatchedDelimiter` if the line ends before the closing parenthesis.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let open = tokens.next().map(|token| token.position).unwrap_or_default();
    let expr = parse_expression(tokens, deeper(depth, open)?)?;

    match tokens.peek() {
        Some(Token { kind: TokenKind::RParen, .. }) => {
            tokens.next();
            Ok(expr)
        },
        Some(token) if token.kind.is_terminator() => {
            Err(ParseError::UnmatchedDelimiter { delimiter: '(',
                                                 position:  open, })
        },
        None => Err(ParseError::UnmatchedDelimiter { delimiter: '(',
                                                     position:  open, }),
        other => Err(unexpected(other.copied(), "')'")),
    }
}
