use std::iter::Peekable;

use crate::{
    ast::AstNode,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest expression tree the parser will build.
///
/// Parentheses count as a level even though they add no node, so recursion
/// in the parser is bounded as well as the tree handed to the evaluator.
pub const MAX_DEPTH: usize = 256;

/// Parses a complete token stream into an expression tree.
///
/// The stream is expected to end with [`Token::End`], as produced by
/// [`tokenize`](crate::interpreter::lexer::tokenize). A stream missing it is
/// treated as if it ended right after its last token.
///
/// # Errors
/// - `UnexpectedToken` for a token that cannot continue the expression.
/// - `UnknownIdentifier` for any name other than `x` or a supported function.
/// - `UnmatchedParen` for an unclosed `(` or a stray `)`.
/// - `UnexpectedEnd` if the input stops where an operand is required.
/// - `TooDeep` if nesting or a long operator chain would exceed
///   [`MAX_DEPTH`].
///
/// # Example
/// ```
/// use graphfx::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let implicit = parse(&tokenize("2(x+1)").unwrap()).unwrap();
/// let explicit = parse(&tokenize("2*(x+1)").unwrap()).unwrap();
/// assert_eq!(implicit, explicit);
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<AstNode> {
    if !matches!(tokens.last(), Some((Token::End, _))) {
        let end = tokens.last().map_or(0, |(_, position)| position + 1);
        let mut terminated = tokens.to_vec();
        terminated.push((Token::End, end));
        return parse(&terminated);
    }

    let mut iter = tokens.iter().peekable();
    let ast = parse_expression(&mut iter, 0)?;

    match iter.peek() {
        Some((Token::End, _)) | None => {
            log::trace!("parsed expression tree {ast}");
            Ok(ast)
        },
        Some((Token::RParen, position)) => Err(ParseError::UnmatchedParen { position: *position }),
        Some((tok, position)) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                                   position: *position, }),
    }
}

/// Parses a full expression.
///
/// Begins at the lowest-precedence level, addition, and descends through the
/// precedence hierarchy.
///
/// `depth` is the number of tree levels already above this expression.
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<AstNode>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, depth)
}

/// Fails with `TooDeep` at `position` once `depth` exceeds [`MAX_DEPTH`].
pub(crate) const fn check_depth(depth: usize, position: usize) -> ParseResult<()> {
    if depth > MAX_DEPTH {
        Err(ParseError::TooDeep { position })
    } else {
        Ok(())
    }
}

/// Returns the byte offset of the next token, or 0 if there is none.
pub(crate) fn next_position<'a, I>(tokens: &mut Peekable<I>) -> usize
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.peek().map_or(0, |(_, position)| *position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{BinaryOperator, Function},
        interpreter::lexer::tokenize,
    };

    fn parse_str(source: &str) -> ParseResult<AstNode> {
        parse(&tokenize(source).unwrap())
    }

    #[test]
    fn stray_closing_paren_is_unmatched() {
        assert_eq!(parse_str("x + 1)"), Err(ParseError::UnmatchedParen { position: 5 }));
    }

    #[test]
    fn trailing_comma_is_unexpected() {
        assert!(matches!(parse_str("x,"),
                         Err(ParseError::UnexpectedToken { position: 1, .. })));
    }

    #[test]
    fn unterminated_stream_is_accepted() {
        let tokens = vec![(Token::Identifier("x".to_string()), 0)];
        assert_eq!(parse(&tokens), Ok(AstNode::Variable));

        let tokens = vec![(Token::Number(1.0), 0), (Token::Plus, 1)];
        assert_eq!(parse(&tokens), Err(ParseError::UnexpectedEnd { position: 2 }));
    }

    #[test]
    fn precedence_of_sum_over_product() {
        let expected = AstNode::binary(BinaryOperator::Add,
                                       AstNode::Constant(1.0),
                                       AstNode::binary(BinaryOperator::Mul,
                                                       AstNode::Constant(2.0),
                                                       AstNode::call(Function::Sin,
                                                                     AstNode::Variable)));
        assert_eq!(parse_str("1 + 2sin(x)"), Ok(expected));
    }

    #[test]
    fn deep_nesting_is_rejected() {
        let source = format!("{}x{}", "(".repeat(5000), ")".repeat(5000));
        assert!(matches!(parse_str(&source), Err(ParseError::TooDeep { .. })));

        let source = format!("{}x", "-".repeat(5000));
        assert!(matches!(parse_str(&source), Err(ParseError::TooDeep { .. })));

        let source = format!("{}x{}", "sin(".repeat(5000), ")".repeat(5000));
        assert!(matches!(parse_str(&source), Err(ParseError::TooDeep { .. })));

        let source = format!("{}x", "e^".repeat(5000));
        assert!(matches!(parse_str(&source), Err(ParseError::TooDeep { .. })));
    }

    #[test]
    fn long_operator_chains_are_rejected() {
        let sum = format!("{}x", "x+".repeat(200_000));
        assert!(matches!(parse_str(&sum), Err(ParseError::TooDeep { .. })));

        let product = "x ".repeat(5000);
        assert!(matches!(parse_str(&product), Err(ParseError::TooDeep { .. })));

        let product = "x*".repeat(5000) + "x";
        assert!(matches!(parse_str(&product), Err(ParseError::TooDeep { .. })));

        let power = "x^".repeat(5000) + "x";
        assert!(matches!(parse_str(&power), Err(ParseError::TooDeep { .. })));
    }

    #[test]
    fn too_deep_points_at_the_offending_token() {
        // Operator `k` sits at byte 2k - 1; the chain first exceeds the limit
        // at the one that makes the tree MAX_DEPTH + 1 levels deep.
        let sum = format!("{}x", "x+".repeat(1000));
        assert_eq!(parse_str(&sum), Err(ParseError::TooDeep { position: 2 * MAX_DEPTH - 1 }));
    }

    #[test]
    fn nesting_below_the_limit_is_accepted() {
        let source = format!("{}x{}", "(".repeat(100), ")".repeat(100));
        assert_eq!(parse_str(&source), Ok(AstNode::Variable));

        let sum = format!("{}x", "x+".repeat(200));
        assert_eq!(parse_str(&sum).map(|ast| ast.depth()), Ok(201));
    }
}
