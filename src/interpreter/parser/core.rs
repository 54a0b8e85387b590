use std::iter::Peekable;

use crate::{
    ast::{ConditionalBranch, Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Position, Token, TokenKind},
        parser::{binary::parse_logical_or, block::parse_block},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of the expression.
/// - `depth`: How many groupings, prefix operators and blocks enclose the
///   expression; `0` at the start of a line.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// `NestingTooDeep` when the expression nests beyond
/// [`MAX_NESTING_DEPTH`](crate::interpreter::parser::utils::MAX_NESTING_DEPTH)
/// levels, besides the usual syntax errors.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_logical_or(tokens, depth)
}

/// Parses a conditional statement with optional `wila` branches.
///
/// Syntax:
/// ```text
///     ila <condition> { <body> }
///     } wila ila <condition> { <body> }
///     } wila { <body> }
/// ```
/// `wila` has to follow the closing brace of the previous branch on the same
/// line; a `wila` starting a new line is not attached to the conditional.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `ila` keyword.
/// - `position`: Position of the `ila` keyword.
/// - `depth`: Nesting depth of the statement.
///
/// # Returns
/// A `Statement::Conditional` holding every branch in source order.
///
/// # Errors
/// - `UnexpectedToken` if a branch body does not start with `{`.
/// - `UnterminatedBlock` if a body is never closed.
/// - Propagates any errors from condition and body parsing.
pub fn parse_conditional<'a, I>(tokens: &mut Peekable<I>,
                                position: Position,
                                depth: usize)
                                -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut branches = vec![parse_branch(tokens, depth)?];
    let mut otherwise = None;

    while tokens.next_if(|token| token.kind == TokenKind::Wila)
                .is_some()
    {
        if tokens.next_if(|token| token.kind == TokenKind::Ila)
                 .is_some()
        {
            branches.push(parse_branch(tokens, depth)?);
            continue;
        }
        otherwise = Some(parse_block(tokens, depth)?);
        break;
    }

    Ok(Statement::Conditional { branches,
                                otherwise,
                                position })
}

fn parse_branch<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<ConditionalBranch>
    where I: Iterator<Item = &'a Token> + Clone
{
    let condition = parse_expression(tokens, depth)?;
    let body = parse_block(tokens, depth)?;
    Ok(ConditionalBranch { condition, body })
}

/// Parses a `mazal` loop.
///
/// Syntax: `mazal <condition> { <body> }`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `mazal` keyword.
/// - `position`: Position of the `mazal` keyword.
/// - `depth`: Nesting depth of the statement.
///
/// # Errors
/// Propagates errors from the condition and the body.
pub fn parse_loop<'a, I>(tokens: &mut Peekable<I>,
                         position: Position,
                         depth: usize)
                         -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let condition = parse_expression(tokens, depth)?;
    let body = parse_block(tokens, depth)?;
    Ok(Statement::Loop { condition,
                         body,
                         position })
}
