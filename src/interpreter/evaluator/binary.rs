use crate::ast::BinaryOperator;

/// Evaluates a binary operation on two values.
///
/// Arithmetic follows IEEE-754: dividing by zero yields an infinity or NaN
/// rather than an error.
///
/// # Example
/// ```
/// use graphfx::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Sub, 1.0, 3.0), -2.0);
/// assert_eq!(eval_binary(BinaryOperator::Div, 1.0, 0.0), f64::INFINITY);
/// assert!(eval_binary(BinaryOperator::Div, 0.0, 0.0).is_nan());
/// ```
#[must_use]
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => left / right,
        BinaryOperator::Pow => eval_pow(left, right),
    }
}

/// Evaluates a real-valued power.
///
/// A negative base with a non-integer exponent has no real result and
/// yields NaN. Integer exponents of negative bases keep their sign.
#[must_use]
pub fn eval_pow(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_base_with_fractional_exponent_is_nan() {
        assert!(eval_pow(-8.0, 1.0 / 3.0).is_nan());
        assert!(eval_pow(-2.0, 0.5).is_nan());
    }

    #[test]
    fn negative_base_with_integer_exponent() {
        assert_eq!(eval_pow(-2.0, 3.0), -8.0);
        assert_eq!(eval_pow(-2.0, 2.0), 4.0);
    }

    #[test]
    fn zero_to_negative_power_is_infinite() {
        assert_eq!(eval_pow(0.0, -1.0), f64::INFINITY);
    }
}
