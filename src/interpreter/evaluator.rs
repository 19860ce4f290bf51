/// Core evaluation logic.
///
/// Walks the expression tree at each domain point and packages the samples
/// into an [`EvalResult`](core::EvalResult). Also hosts the chunked,
/// multi-threaded sweep.
pub mod core;

/// Unary operator evaluation.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements IEEE-754 arithmetic and real-valued exponentiation.
pub mod binary;

/// Built-in function evaluation.
///
/// Maps each [`Function`](crate::ast::Function) onto its real-valued
/// implementation, returning NaN outside the function's domain.
pub mod function;
