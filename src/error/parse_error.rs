use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while parsing a token stream.
///
/// Every variant carries the byte offset of the token that triggered it.
pub enum ParseError {
    /// Found a token that cannot appear at this point of the expression.
    #[error("Error at position {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// Description of the token encountered.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// An identifier is neither `x` nor a supported function name.
    #[error("Error at position {position}: Unknown identifier '{name}'.")]
    UnknownIdentifier {
        /// The identifier as written.
        name:     String,
        /// Byte offset of the identifier.
        position: usize,
    },
    /// A parenthesis has no matching partner.
    #[error("Error at position {position}: Unmatched parenthesis.")]
    UnmatchedParen {
        /// Byte offset of the unmatched parenthesis.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    #[error("Error at position {position}: Unexpected end of input.")]
    UnexpectedEnd {
        /// Byte offset where the input ended.
        position: usize,
    },
    /// The expression tree would be deeper than
    /// [`MAX_DEPTH`](crate::interpreter::parser::core::MAX_DEPTH).
    #[error("Error at position {position}: Expression is nested too deeply.")]
    TooDeep {
        /// Byte offset of the token that crossed the limit.
        position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnknownIdentifier { position, .. }
            | Self::UnmatchedParen { position }
            | Self::UnexpectedEnd { position }
            | Self::TooDeep { position } => *position,
        }
    }
}
