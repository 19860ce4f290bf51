use crate::ast::Function;

/// Defines a built-in that forwards directly to the `f64` method of the same
/// name. NaN propagates; values outside the real domain come back as NaN.
macro_rules! real_builtin {
    ($fname:ident) => {
        #[must_use]
        pub fn $fname(x: f64) -> f64 {
            x.$fname()
        }
    };
}

real_builtin!(sin);
real_builtin!(cos);
real_builtin!(tan);
real_builtin!(sqrt);
real_builtin!(exp);

/// Computes the natural logarithm.
///
/// Non-positive arguments, `-0.0` included, yield NaN instead of the
/// infinity `f64::ln` returns at zero, so a curve has a gap there.
///
/// # Example
/// ```
/// use graphfx::interpreter::evaluator::function::log;
///
/// assert_eq!(log(1.0), 0.0);
/// assert!(log(0.0).is_nan());
/// assert!(log(-3.0).is_nan());
/// ```
#[must_use]
pub fn log(x: f64) -> f64 {
    if x > 0.0 { x.ln() } else { f64::NAN }
}

impl Function {
    /// Applies the function to a single value.
    ///
    /// # Example
    /// ```
    /// use graphfx::ast::Function;
    ///
    /// assert_eq!(Function::Sqrt.apply(9.0), 3.0);
    /// assert!(Function::Sqrt.apply(-1.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => sin(x),
            Self::Cos => cos(x),
            Self::Tan => tan(x),
            Self::Log => log(x),
            Self::Sqrt => sqrt(x),
            Self::Exp => exp(x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigonometry_in_radians() {
        assert!((sin(std::f64::consts::FRAC_PI_2) - 1.0).abs() < 1e-12);
        assert!((cos(std::f64::consts::PI) + 1.0).abs() < 1e-12);
        assert!(tan(0.0).abs() < 1e-12);
    }

    #[test]
    fn log_rejects_non_positive_arguments() {
        assert!(log(-0.0).is_nan());
        assert!(log(f64::NAN).is_nan());
        assert!((log(std::f64::consts::E) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn exp_of_one_is_e() {
        assert!((Function::Exp.apply(1.0) - std::f64::consts::E).abs() < 1e-12);
    }
}
