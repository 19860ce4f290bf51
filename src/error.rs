/// Tokenizer errors.
///
/// Raised when the raw expression contains a character that cannot start any
/// token, such as `;` or a non-ASCII symbol.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// the token stream: unexpected tokens, unbalanced parentheses, unknown names
/// and premature end of input.
pub mod parse_error;
/// Domain errors.
///
/// Raised by the sampler when the requested bounds or sample count cannot
/// produce an ordered sequence of evaluation points.
pub mod domain_error;
/// Pipeline errors.
///
/// Wraps the error of whichever stage failed first, together with the stage
/// tag and the structured report handed to callers.
pub mod pipeline_error;

pub use domain_error::DomainError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use pipeline_error::{ErrorReport, PipelineError, Stage};
