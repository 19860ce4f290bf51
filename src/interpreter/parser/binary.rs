use std::iter::Peekable;

use crate::{
    ast::{AstNode, BinaryOperator},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, check_depth},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The chain builds a left-deep tree, so its length counts toward the depth
/// limit just like nesting does.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<AstNode>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(tokens, depth)?;
    let mut height = left.depth();
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let position = *position;
            tokens.next();
            let right = parse_multiplicative(tokens, depth + 1)?;
            height = 1 + height.max(right.depth());
            check_depth(depth + height, position)?;
            left = AstNode::binary(op, left, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative `*` and `/`. A factor directly followed by
/// something that starts another factor (a number, an identifier or `(`) is
/// an implicit multiplication at the same precedence, so `4x`, `4sin(x)`,
/// `2(x+1)`, `x2` and `(x)(x)` all multiply. `1/2x` reads as `(1/2)*x`.
///
/// The rule is: `multiplicative := exponent (("*" | "/")? exponent)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<AstNode>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_exponent(tokens, depth)?;
    let mut height = left.depth();
    loop {
        let (op, position) = match tokens.peek() {
            Some((token, position)) if token.starts_primary() => (BinaryOperator::Mul, *position),
            Some((token, position)) => match token_to_binary_operator(token) {
                Some(op @ (BinaryOperator::Mul | BinaryOperator::Div)) => {
                    let position = *position;
                    tokens.next();
                    (op, position)
                },
                _ => break,
            },
            None => break,
        };
        let right = parse_exponent(tokens, depth + 1)?;
        height = 1 + height.max(right.depth());
        check_depth(depth + height, position)?;
        left = AstNode::binary(op, left, right);
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`.
/// Both sides start at the unary level, so `2^-x` is accepted and `-2^2`
/// reads as `(-2)^2`.
///
/// The rule is: `exponent := unary ("^" exponent)?`
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<AstNode>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let base = parse_unary(tokens, depth)?;
    if let Some((Token::Caret, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        check_depth(depth + 1 + base.depth(), position)?;
        let exponent = parse_exponent(tokens, depth + 1)?;
        return Ok(AstNode::binary(BinaryOperator::Pow, base, exponent));
    }
    Ok(base)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators.
///
/// # Example
/// ```
/// use graphfx::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Caret),
///            Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
