use serde::Serialize;

use crate::{
    ast::AstNode,
    interpreter::evaluator::{binary::eval_binary, unary::eval_unary},
    sampler::Domain,
};

/// A single sample of the curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    /// The domain value.
    pub x: f64,
    /// The expression evaluated at `x`. May be NaN or infinite.
    pub y: f64,
}

impl Point {
    /// Returns `true` if `y` can be plotted.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.y.is_finite()
    }
}

/// A sample whose value is NaN or infinite.
///
/// Non-finite samples are not errors: they stay in the curve as gaps and are
/// only reported through [`EvalResult::warnings`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvalWarning {
    /// Index of the sample within the curve.
    pub index: usize,
    /// The domain value.
    pub x:     f64,
    /// The non-finite result.
    pub y:     f64,
}

/// The sampled curve: one [`Point`] per domain value, in domain order.
///
/// When serialized, non-finite `y` values become `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EvalResult {
    points: Vec<Point>,
}

impl EvalResult {
    /// Returns all samples in domain order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there are no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the domain values.
    #[must_use]
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Returns the evaluated values, NaN and infinities included.
    #[must_use]
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Returns one warning per non-finite sample.
    #[must_use]
    pub fn warnings(&self) -> Vec<EvalWarning> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_finite())
            .map(|(index, p)| EvalWarning { index,
                                            x: p.x,
                                            y: p.y })
            .collect()
    }

    /// Iterates over the samples that can be plotted.
    pub fn finite_points(&self) -> impl Iterator<Item = &Point> {
        self.points.iter().filter(|p| p.is_finite())
    }
}

impl From<Vec<Point>> for EvalResult {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl AstNode {
    /// Evaluates the expression at a single value of `x`.
    ///
    /// Evaluation never fails: domain errors such as `log(-1)` or `sqrt(-1)`
    /// produce NaN, and division by zero follows IEEE-754.
    ///
    /// # Example
    /// ```
    /// use graphfx::compile;
    ///
    /// let ast = compile("2^3^2").unwrap();
    /// assert_eq!(ast.eval_at(0.0), 512.0);
    ///
    /// let ast = compile("log(x)").unwrap();
    /// assert!(ast.eval_at(-1.0).is_nan());
    /// ```
    #[must_use]
    pub fn eval_at(&self, x: f64) -> f64 {
        match self {
            Self::Constant(value) => *value,
            Self::Variable => x,
            Self::UnaryOp { op, operand } => eval_unary(*op, operand.eval_at(x)),
            Self::BinaryOp { op, left, right } => {
                eval_binary(*op, left.eval_at(x), right.eval_at(x))
            },
            Self::Call { function, argument } => function.apply(argument.eval_at(x)),
        }
    }
}

/// Evaluates `ast` at every sample of a slice of domain values.
fn sweep(ast: &AstNode, xs: &[f64]) -> Vec<Point> {
    xs.iter()
      .map(|&x| Point { x,
                        y: ast.eval_at(x) })
      .collect()
}

/// Evaluates the expression once per domain point.
///
/// The output has the same length and order as `domain`. A NaN or infinite
/// value at one point never stops the sweep.
///
/// # Example
/// ```
/// use graphfx::{compile, interpreter::evaluator::core::evaluate, sampler::sample};
///
/// let ast = compile("sqrt(x)").unwrap();
/// let domain = sample(-1.0, 1.0, 3).unwrap();
/// let result = evaluate(&ast, &domain);
///
/// assert_eq!(result.len(), 3);
/// assert!(result.points()[0].y.is_nan());
/// assert_eq!(result.points()[2].y, 1.0);
/// ```
#[must_use]
pub fn evaluate(ast: &AstNode, domain: &Domain) -> EvalResult {
    let result = EvalResult::from(sweep(ast, domain.as_slice()));
    log::debug!("evaluated {} samples", result.len());
    result
}

/// Evaluates the expression over `domain` split across `workers` threads.
///
/// The domain is cut into contiguous chunks, each chunk is evaluated on its
/// own scoped thread, and the chunks are joined back in domain order. The
/// output is bit-identical to [`evaluate`]. With one worker, or fewer points
/// than workers, the sweep runs on the calling thread.
///
/// # Panics
/// Re-raises a panic from a worker thread. Evaluation itself does not panic.
#[must_use]
pub fn evaluate_parallel(ast: &AstNode, domain: &Domain, workers: usize) -> EvalResult {
    let xs = domain.as_slice();
    if workers <= 1 || xs.len() < workers {
        return evaluate(ast, domain);
    }

    let chunk_len = xs.len().div_ceil(workers);
    let points: Vec<Point> = std::thread::scope(|scope| {
        let handles: Vec<_> = xs.chunks(chunk_len)
                                .map(|chunk| scope.spawn(move || sweep(ast, chunk)))
                                .collect();

        handles.into_iter()
               .flat_map(|handle| {
                   handle.join()
                         .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
               })
               .collect()
    });

    log::debug!("evaluated {} samples on {workers} workers", points.len());
    EvalResult::from(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compile, sampler::sample};

    #[test]
    fn log_over_symmetric_domain_has_gaps() {
        let ast = compile("log(x)").unwrap();
        let domain = sample(-5.0, 5.0, 11).unwrap();
        let result = evaluate(&ast, &domain);

        assert_eq!(result.len(), 11);
        for point in result.points() {
            if point.x <= 0.0 {
                assert!(point.y.is_nan(), "expected NaN at x = {}", point.x);
            } else {
                assert!(point.y.is_finite(), "expected finite value at x = {}", point.x);
            }
        }
        assert_eq!(result.warnings().len(), 6);
        assert_eq!(result.finite_points().count(), 5);
    }

    #[test]
    fn division_by_zero_is_infinite_not_fatal() {
        let ast = compile("1/x").unwrap();
        let domain = sample(-1.0, 1.0, 3).unwrap();
        let ys = evaluate(&ast, &domain).ys();

        assert_eq!(ys[0], -1.0);
        assert_eq!(ys[1], f64::INFINITY);
        assert_eq!(ys[2], 1.0);
    }

    #[test]
    fn warnings_record_index_and_value() {
        let ast = compile("sqrt(x)").unwrap();
        let domain = sample(-2.0, 2.0, 5).unwrap();
        let warnings = evaluate(&ast, &domain).warnings();

        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].index, 0);
        assert_eq!(warnings[1].x, -1.0);
        assert!(warnings[1].y.is_nan());
    }

    #[test]
    fn parallel_sweep_matches_sequential() {
        let ast = compile("sin(x)/x + log(x)").unwrap();
        let domain = sample(-10.0, 10.0, 101).unwrap();

        let sequential = evaluate(&ast, &domain);
        for workers in [0, 1, 2, 3, 7, 200] {
            let parallel = evaluate_parallel(&ast, &domain, workers);
            let a: Vec<u64> = sequential.ys().iter().map(|y| y.to_bits()).collect();
            let b: Vec<u64> = parallel.ys().iter().map(|y| y.to_bits()).collect();
            assert_eq!(a, b, "mismatch with {workers} workers");
            assert_eq!(sequential.xs(), parallel.xs());
        }
    }
}
