//! # graphfx
//!
//! graphfx turns an informal mathematical expression in one variable, such
//! as `4x^2 - 2sin(x)` or `e^(x+1)`, into a sampled curve. Expressions are
//! tokenized, parsed under a closed grammar, and evaluated over evenly
//! spaced points of a domain.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::AstNode,
    error::PipelineError,
    interpreter::{lexer::tokenize, parser::core::parse},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `AstNode` enum and the operator and function
/// types it is built from. The AST is built by the parser and walked by the
/// evaluator.
pub mod ast;
/// Provides error types for every stage of the pipeline.
///
/// Lexing, parsing and domain errors each carry their own detail (offending
/// character, token, position or bounds). `PipelineError` wraps whichever
/// stage failed first without discarding that detail.
pub mod error;
/// Tokenizer, parser and evaluator.
///
/// This module ties together the stages that turn source text into numbers.
///
/// # Responsibilities
/// - Converts the expression into positioned tokens.
/// - Builds an expression tree under an operator-precedence grammar.
/// - Evaluates the tree over a domain.
pub mod interpreter;
/// Orchestrates a plotting request.
///
/// Sequences the empty-input check, domain sampling, tokenizing, parsing and
/// evaluation, and returns either the sampled curve or the first error.
pub mod pipeline;
/// Generates the evaluation points of a domain.
pub mod sampler;
/// General utilities for safe numeric conversion.
pub mod util;

pub use crate::{
    interpreter::evaluator::core::{EvalResult, EvalWarning, Point},
    pipeline::{PlotRequest, run, run_with_samples},
    sampler::Domain,
};

/// Tokenizes and parses an expression into its syntax tree.
///
/// This is the front half of the pipeline, useful for validating input or
/// showing the normalized form of what the user typed.
///
/// # Errors
/// Returns `PipelineError::EmptyExpression` for blank input, and the wrapped
/// lexer or parser error otherwise.
///
/// # Examples
/// ```
/// use graphfx::compile;
///
/// assert_eq!(compile("4x").unwrap(), compile("4*x").unwrap());
/// assert_eq!(compile("2^3^2").unwrap().eval_at(0.0), 512.0);
///
/// // Only `x` and the supported functions are valid names.
/// assert!(compile("foo(x)").is_err());
/// ```
pub fn compile(expression: &str) -> Result<AstNode, PipelineError> {
    if expression.trim().is_empty() {
        return Err(PipelineError::EmptyExpression);
    }

    let tokens = tokenize(expression)?;
    parse(&tokens).map_err(PipelineError::from)
}
