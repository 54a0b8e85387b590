use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary, utils::MAX_EXPRESSION_HEIGHT},
    },
};

/// Parses one left-associative precedence level.
///
/// `next` parses the operands (the next tighter level) and `accepts` selects
/// the operators belonging to this level. Chains grow the tree to the left,
/// so a chain taller than [`MAX_EXPRESSION_HEIGHT`] is rejected with
/// `NestingTooDeep` at the operator that crosses the limit.
fn parse_left_assoc<'a, I>(tokens: &mut Peekable<I>,
                           depth: usize,
                           next: fn(&mut Peekable<I>, usize) -> ParseResult<Expr>,
                           accepts: fn(BinaryOperator) -> bool)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = next(tokens, depth)?;
    let mut height = left.height();
    while let Some(token) = tokens.peek() {
        if let Some(op) = token_to_binary_operator(&token.kind)
           && accepts(op)
        {
            let position = token.position;
            tokens.next();
            let right = next(tokens, depth)?;
            height = height.max(right.height()) + 1;
            if height > MAX_EXPRESSION_HEIGHT {
                return Err(ParseError::NestingTooDeep { position });
            }
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses logical OR expressions.
///
/// The rule is: `logical_or := logical_and ("||" logical_and)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Nesting depth of the expression.
///
/// # Returns
/// A left-associated chain of `||` operations.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_assoc(tokens, depth, parse_logical_and, |op| op == BinaryOperator::Or)
}

/// Parses logical AND expressions.
///
/// The rule is: `logical_and := relational ("&&" relational)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_assoc(tokens, depth, parse_relational, |op| op == BinaryOperator::And)
}

/// Parses relational and equality operators.
///
/// This parser handles all comparison operators:
/// `<`, `>`, `<=`, `>=`, `==`, `!=`.
///
/// Comparisons chain to the left, so `a < b == c` compares the boolean result
/// of `a < b` with `c`.
///
/// The rule is: `relational := additive (op additive)*`
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_assoc(tokens, depth, parse_additive, is_relational_op)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Nesting depth of the expression.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_assoc(tokens, depth, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "%") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_assoc(tokens, depth, parse_unary, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
    })
}

/// Maps a token kind to its binary operator, if it is one.
///
/// ## Example
/// ```
/// use darja::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Percent), Some(BinaryOperator::Mod));
/// assert_eq!(token_to_binary_operator(&TokenKind::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
        Sub,
    };
    match kind {
        TokenKind::Plus => Some(Add),
        TokenKind::Minus => Some(Sub),
        TokenKind::Star => Some(Mul),
        TokenKind::Slash => Some(Div),
        TokenKind::Percent => Some(Mod),
        TokenKind::Less => Some(Less),
        TokenKind::Greater => Some(Greater),
        TokenKind::LessEqual => Some(LessEqual),
        TokenKind::GreaterEqual => Some(GreaterEqual),
        TokenKind::EqualEqual => Some(Equal),
        TokenKind::BangEqual => Some(NotEqual),
        TokenKind::AndAnd => Some(And),
        TokenKind::OrOr => Some(Or),
        _ => None,
    }
}

/// Returns `true` for the comparison operators.
#[must_use]
pub const fn is_relational_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::Greater
             | BinaryOperator::LessEqual
             | BinaryOperator::GreaterEqual
             | BinaryOperator::Equal
             | BinaryOperator::NotEqual)
}
