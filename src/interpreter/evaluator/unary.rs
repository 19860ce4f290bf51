use crate::ast::UnaryOperator;

/// Evaluates a unary operation on a value.
///
/// # Example
/// ```
/// use graphfx::{ast::UnaryOperator, interpreter::evaluator::unary::eval_unary};
///
/// assert_eq!(eval_unary(UnaryOperator::Neg, 2.5), -2.5);
/// ```
#[must_use]
pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
    match op {
        UnaryOperator::Neg => -value,
    }
}
