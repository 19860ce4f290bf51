use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token of an expression.
///
/// The tokenizer is context-free: it neither resolves function names nor
/// inserts implicit multiplication. Both are left to the parser.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Decimal literal such as `4`, `2.5`, `3.` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// A run of ASCII letters such as `x`, `sin` or `e`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// End of input. Never matched by the lexer itself; [`tokenize`] appends
    /// it once after the last real token.
    End,
}

impl Token {
    /// Returns `true` if this token can begin a primary expression, which is
    /// what triggers implicit multiplication after a complete factor.
    #[must_use]
    pub const fn starts_primary(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Identifier(_) | Self::LParen)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Caret => write!(f, "'^'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Comma => write!(f, "','"),
            Self::End => write!(f, "end of input"),
        }
    }
}

/// Parses a decimal literal from the current token slice.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Converts an expression string into positioned tokens.
///
/// Each token is paired with the byte offset where it starts. The returned
/// sequence always ends with a single [`Token::End`] positioned at the length
/// of the source.
///
/// # Errors
/// Returns a [`LexError`] naming the first unrecognized character and its
/// byte offset. A `.` directly after a number, as in `1.2.3` or `3..5`, is
/// unrecognized too.
///
/// # Example
/// ```
/// use graphfx::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("4x").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(4.0), 0),
///                 (Token::Identifier("x".to_string()), 1),
///                 (Token::End, 2)]);
///
/// assert_eq!(tokenize("x;").unwrap_err().position, 1);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(tok) = token {
            let end = lexer.span().end;
            if matches!(tok, Token::Number(_))
               && source.get(end..).is_some_and(|rest| rest.starts_with('.'))
            {
                return Err(LexError { character: '.',
                                      position:  end, });
            }
            tokens.push((tok, position));
        } else {
            let character = source.get(position..)
                                  .and_then(|rest| rest.chars().next())
                                  .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(LexError { character,
                                  position });
        }
    }

    tokens.push((Token::End, source.len()));
    log::trace!("tokenized {source:?} into {} tokens", tokens.len());

    Ok(tokens)
}
