use std::iter::Peekable;

use crate::{
    ast::{AstNode, Function},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_exponent,
            core::{ParseResult, check_depth, next_position, parse_expression},
        },
    },
};

/// The single free variable.
pub const VARIABLE_NAME: &str = "x";
/// Identifier that, followed by `^`, denotes the natural exponential.
pub const EXP_ALIAS: &str = "e";

/// Parses a unary expression.
///
/// Negation is right-associative, so `--x` is `-(-x)`. Every descent into
/// a nested expression passes through here, which is where the depth limit
/// is enforced.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<AstNode>
    where I: Iterator<Item = &'a (Token, usize)>
{
    check_depth(depth + 1, next_position(tokens))?;

    if let Some((Token::Minus, _)) = tokens.peek() {
        tokens.next();
        let operand = parse_unary(tokens, depth + 1)?;
        Ok(AstNode::neg(operand))
    } else {
        parse_primary(tokens, depth)
    }
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "x"
///              | "e" "^" exponent
///              | function "(" expression ")"
///              | "(" expression ")"
/// ```
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<AstNode>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEnd { position: 0 })?;

    match peeked {
        (Token::Number(value), _) => {
            let value = *value;
            tokens.next();
            Ok(AstNode::Constant(value))
        },
        (Token::LParen, _) => parse_grouping(tokens, depth),
        (Token::Identifier(_), _) => parse_identifier(tokens, depth),
        (Token::End, position) => Err(ParseError::UnexpectedEnd { position: *position }),
        (tok, position) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                             position: *position, }),
    }
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// Returns the inner expression as-is (no wrapper node), but the group still
/// costs one level of depth.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<AstNode>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let open = tokens.next().map_or(0, |(_, position)| *position);
    let expr = parse_expression(tokens, depth + 1)?;
    expect_closing_paren(tokens, open)?;
    Ok(expr)
}

/// Parses the variable, a function call, or the `e^` alias.
///
/// The exponent of `e^` is parsed at exponent level, so the whole of
/// `e^(x+1)` or `e^x^2` becomes the argument of the exponential.
///
/// # Errors
/// - `UnknownIdentifier` for any other name, including a bare `e`.
/// - `UnexpectedToken` if a function name is not followed by `(`, or if its
///   parentheses hold anything other than a single expression.
/// - `UnmatchedParen` if the argument list is never closed.
fn parse_identifier<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<AstNode>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (name, position) = match tokens.next() {
        Some((Token::Identifier(name), position)) => (name.as_str(), *position),
        Some((tok, position)) => {
            return Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                     position: *position, });
        },
        None => return Err(ParseError::UnexpectedEnd { position: 0 }),
    };

    if name == VARIABLE_NAME {
        return Ok(AstNode::Variable);
    }

    if name == EXP_ALIAS
       && let Some((Token::Caret, _)) = tokens.peek()
    {
        tokens.next();
        let exponent = parse_exponent(tokens, depth + 1)?;
        return Ok(AstNode::call(Function::Exp, exponent));
    }

    let Some(function) = Function::from_name(name) else {
        return Err(ParseError::UnknownIdentifier { name: name.to_string(),
                                                   position });
    };

    let open = match tokens.next() {
        Some((Token::LParen, open)) => *open,
        Some((Token::End, end)) => return Err(ParseError::UnexpectedEnd { position: *end }),
        Some((tok, at)) => {
            return Err(ParseError::UnexpectedToken { token:    format!("{tok} (expected '(' after '{name}')"),
                                                     position: *at, });
        },
        None => return Err(ParseError::UnexpectedEnd { position }),
    };

    let argument = parse_expression(tokens, depth + 1)?;
    expect_closing_paren(tokens, open)?;

    Ok(AstNode::call(function, argument))
}

/// Consumes the `)` that closes the parenthesis opened at `open`.
///
/// Running out of input reports the opening parenthesis as unmatched; any
/// other token is unexpected.
fn expect_closing_paren<'a, I>(tokens: &mut Peekable<I>, open: usize) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::RParen, _)) => {
            tokens.next();
            Ok(())
        },
        Some((Token::End, _)) | None => Err(ParseError::UnmatchedParen { position: open }),
        Some((tok, position)) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                                   position: *position, }),
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{AstNode, BinaryOperator, Function},
        error::ParseError,
        interpreter::{lexer::tokenize, parser::core::parse},
    };

    fn parse_str(source: &str) -> Result<AstNode, ParseError> {
        parse(&tokenize(source).unwrap())
    }

    #[test]
    fn exp_alias_captures_parenthesized_exponent() {
        let expected = AstNode::call(Function::Exp,
                                     AstNode::binary(BinaryOperator::Add,
                                                     AstNode::Variable,
                                                     AstNode::Constant(1.0)));
        assert_eq!(parse_str("e^(x+1)"), Ok(expected));
    }

    #[test]
    fn exp_alias_is_right_associative() {
        let expected = AstNode::call(Function::Exp,
                                     AstNode::binary(BinaryOperator::Pow,
                                                     AstNode::Variable,
                                                     AstNode::Constant(2.0)));
        assert_eq!(parse_str("e^x^2"), Ok(expected));
    }

    #[test]
    fn exp_alias_stops_before_implicit_product() {
        let expected = AstNode::binary(BinaryOperator::Mul,
                                       AstNode::call(Function::Exp, AstNode::Constant(2.0)),
                                       AstNode::Variable);
        assert_eq!(parse_str("e^2x"), Ok(expected));
    }

    #[test]
    fn bare_e_is_unknown() {
        assert_eq!(parse_str("2e"),
                   Err(ParseError::UnknownIdentifier { name:     "e".to_string(),
                                                       position: 1, }));
    }

    #[test]
    fn unknown_function_is_rejected() {
        assert_eq!(parse_str("foo(x)"),
                   Err(ParseError::UnknownIdentifier { name:     "foo".to_string(),
                                                       position: 0, }));
        assert!(matches!(parse_str("exp(x)"), Err(ParseError::UnknownIdentifier { .. })));
        assert!(matches!(parse_str("Sin(x)"), Err(ParseError::UnknownIdentifier { .. })));
        assert!(matches!(parse_str("y + 1"), Err(ParseError::UnknownIdentifier { .. })));
    }

    #[test]
    fn function_requires_parenthesized_argument() {
        assert!(matches!(parse_str("sin x"),
                         Err(ParseError::UnexpectedToken { position: 4, .. })));
        assert_eq!(parse_str("sqrt"), Err(ParseError::UnexpectedEnd { position: 4 }));
    }

    #[test]
    fn function_takes_exactly_one_argument() {
        assert!(matches!(parse_str("sin(x, 2)"),
                         Err(ParseError::UnexpectedToken { position: 5, .. })));
        assert_eq!(parse_str("cos()"),
                   Err(ParseError::UnexpectedToken { token:    "')'".to_string(),
                                                     position: 4, }));
    }

    #[test]
    fn unclosed_paren_points_at_opening() {
        assert_eq!(parse_str("2*(x+1"), Err(ParseError::UnmatchedParen { position: 2 }));
        assert_eq!(parse_str("log(x"), Err(ParseError::UnmatchedParen { position: 3 }));
    }

    #[test]
    fn dangling_operator_is_unexpected_end() {
        assert_eq!(parse_str("x^"), Err(ParseError::UnexpectedEnd { position: 2 }));
        assert_eq!(parse_str("-"), Err(ParseError::UnexpectedEnd { position: 1 }));
    }

    #[test]
    fn double_negation() {
        assert_eq!(parse_str("--x"), Ok(AstNode::neg(AstNode::neg(AstNode::Variable))));
    }
}
