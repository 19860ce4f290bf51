use serde::Serialize;
use thiserror::Error;

use crate::error::{DomainError, LexError, ParseError};

/// The pipeline stage an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stage {
    /// Tokenizing the raw expression.
    Lex,
    /// Building the syntax tree.
    Parse,
    /// Evaluating the tree over the domain.
    Eval,
    /// Validating and sampling the domain.
    Domain,
    /// No expression was entered.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Error)]
/// The first fatal error raised by any stage of a plotting request.
///
/// Stage errors are wrapped as-is so their positions and details survive.
pub enum PipelineError {
    /// The expression was empty or contained only whitespace.
    #[error("No expression entered.")]
    EmptyExpression,
    /// The requested domain cannot be sampled.
    #[error(transparent)]
    InvalidDomain(#[from] DomainError),
    /// The expression contains an unrecognized character.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The expression is not well formed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl PipelineError {
    /// Returns the stage that produced this error.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::EmptyExpression => Stage::Empty,
            Self::InvalidDomain(_) => Stage::Domain,
            Self::Lex(_) => Stage::Lex,
            Self::Parse(_) => Stage::Parse,
        }
    }

    /// Returns the byte offset in the expression the error refers to, if any.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Lex(e) => Some(e.position),
            Self::Parse(e) => Some(e.position()),
            Self::EmptyExpression | Self::InvalidDomain(_) => None,
        }
    }

    /// Builds the flat report handed to presentation layers.
    #[must_use]
    pub fn report(&self) -> ErrorReport {
        ErrorReport { stage:    self.stage(),
                      message:  self.to_string(),
                      position: self.position(), }
    }
}

/// Flat, serializable description of a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// The stage that failed.
    pub stage:    Stage,
    /// Human readable description.
    pub message:  String,
    /// Byte offset into the expression, when the failure has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_keeps_stage_and_position() {
        let err = PipelineError::from(ParseError::UnknownIdentifier { name:     "foo".to_string(),
                                                                      position: 3, });
        let report = err.report();

        assert_eq!(report.stage, Stage::Parse);
        assert_eq!(report.position, Some(3));
        assert!(report.message.contains("foo"));
    }

    #[test]
    fn domain_errors_have_no_position() {
        let err = PipelineError::from(DomainError::TooFewSamples { count: 1 });

        assert_eq!(err.stage(), Stage::Domain);
        assert_eq!(err.position(), None);
    }
}
