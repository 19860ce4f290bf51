use serde::Deserialize;

use crate::{
    error::PipelineError,
    interpreter::{
        evaluator::core::{EvalResult, evaluate},
        lexer::tokenize,
        parser::core::parse,
    },
    sampler::{DEFAULT_DOMAIN_MAX, DEFAULT_DOMAIN_MIN, DEFAULT_SAMPLE_COUNT, Domain, sample},
};

/// Everything needed to turn an expression into a curve.
///
/// Missing fields take the defaults of an interactive plot: the domain
/// `[-10, 10]` sampled at 100 points.
///
/// # Example
/// ```
/// use graphfx::PlotRequest;
///
/// let (domain, curve) = PlotRequest::new("x^2").with_domain(0.0, 2.0)
///                                              .with_samples(3)
///                                              .run()
///                                              .unwrap();
///
/// assert_eq!(domain.as_slice(), &[0.0, 1.0, 2.0]);
/// assert_eq!(curve.ys(), vec![0.0, 1.0, 4.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlotRequest {
    /// The raw expression in `x`.
    pub expression:   String,
    /// Lower bound of the domain.
    pub domain_min:   f64,
    /// Upper bound of the domain.
    pub domain_max:   f64,
    /// Number of evenly spaced samples, endpoints included.
    pub sample_count: usize,
}

impl Default for PlotRequest {
    fn default() -> Self {
        Self { expression:   String::new(),
               domain_min:   DEFAULT_DOMAIN_MIN,
               domain_max:   DEFAULT_DOMAIN_MAX,
               sample_count: DEFAULT_SAMPLE_COUNT, }
    }
}

impl PlotRequest {
    /// Creates a request for `expression` with the default domain.
    #[must_use]
    pub fn new(expression: impl Into<String>) -> Self {
        Self { expression: expression.into(),
               ..Self::default() }
    }

    /// Sets the domain bounds.
    #[must_use]
    pub const fn with_domain(mut self, min: f64, max: f64) -> Self {
        self.domain_min = min;
        self.domain_max = max;
        self
    }

    /// Sets the number of samples.
    #[must_use]
    pub const fn with_samples(mut self, count: usize) -> Self {
        self.sample_count = count;
        self
    }

    /// Runs the full pipeline for this request.
    ///
    /// # Errors
    /// See [`run_with_samples`].
    pub fn run(&self) -> Result<(Domain, EvalResult), PipelineError> {
        run_with_samples(&self.expression,
                         self.domain_min,
                         self.domain_max,
                         self.sample_count)
    }
}

/// Evaluates `expression` over `[min, max]` at the default sample count.
///
/// # Errors
/// See [`run_with_samples`].
///
/// # Example
/// ```
/// use graphfx::{error::PipelineError, run};
///
/// let (domain, curve) = run("4x", -10.0, 10.0).unwrap();
/// assert_eq!(domain.len(), 100);
/// assert_eq!(curve.len(), 100);
///
/// assert_eq!(run("", -10.0, 10.0).unwrap_err(), PipelineError::EmptyExpression);
/// ```
pub fn run(expression: &str, min: f64, max: f64) -> Result<(Domain, EvalResult), PipelineError> {
    run_with_samples(expression, min, max, DEFAULT_SAMPLE_COUNT)
}

/// Evaluates `expression` over `count` evenly spaced points of `[min, max]`.
///
/// Stages run in order: empty check, domain sampling, tokenizing, parsing,
/// evaluation. The first failing stage ends the request and its error is
/// returned wrapped in [`PipelineError`]. Per-point numeric problems are not
/// errors; they appear as NaN or infinite `y` values in the result.
///
/// # Errors
/// - `EmptyExpression` if `expression` is empty or only whitespace. No other
///   stage runs.
/// - `InvalidDomain` if the bounds or count cannot be sampled.
/// - `Lex` for an unrecognized character.
/// - `Parse` for malformed input or unknown identifiers.
pub fn run_with_samples(expression: &str,
                        min: f64,
                        max: f64,
                        count: usize)
                        -> Result<(Domain, EvalResult), PipelineError> {
    if expression.trim().is_empty() {
        log::debug!("no expression entered");
        return Err(PipelineError::EmptyExpression);
    }

    let domain = sample(min, max, count)?;
    let tokens = tokenize(expression)?;
    let ast = parse(&tokens)?;
    log::debug!("normalized {expression:?} to {ast}");

    let result = evaluate(&ast, &domain);
    let warnings = result.warnings();
    if !warnings.is_empty() {
        log::warn!("{} of {} samples of {expression:?} are not finite",
                   warnings.len(),
                   result.len());
    }

    Ok((domain, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainError, LexError, ParseError, Stage};

    #[test]
    fn whitespace_only_is_empty() {
        assert_eq!(run(" \t ", -1.0, 1.0).unwrap_err(), PipelineError::EmptyExpression);
    }

    #[test]
    fn empty_check_precedes_domain_check() {
        let err = run_with_samples("", 1.0, -1.0, 0).unwrap_err();
        assert_eq!(err.stage(), Stage::Empty);
    }

    #[test]
    fn domain_check_precedes_lexing() {
        let err = run("x;", 1.0, -1.0).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidDomain(DomainError::EmptyRange { .. })));
    }

    #[test]
    fn lex_error_is_wrapped() {
        let err = run("x # 2", -1.0, 1.0).unwrap_err();
        assert_eq!(err,
                   PipelineError::Lex(LexError { character: '#',
                                                 position:  2, }));
        assert_eq!(err.report().position, Some(2));
    }

    #[test]
    fn parse_error_is_wrapped() {
        let err = run("foo(x)", -1.0, 1.0).unwrap_err();
        assert!(matches!(err,
                         PipelineError::Parse(ParseError::UnknownIdentifier { position: 0, .. })));
        assert_eq!(err.stage(), Stage::Parse);
    }

    #[test]
    fn request_defaults() {
        let request = PlotRequest::new("x");
        assert_eq!(request.domain_min, -10.0);
        assert_eq!(request.domain_max, 10.0);
        assert_eq!(request.sample_count, 100);
    }

    #[test]
    fn request_deserializes_with_defaults() {
        let request: PlotRequest =
            serde_json::from_str(r#"{"expression": "sin(x)", "sample_count": 5}"#).unwrap();

        assert_eq!(request, PlotRequest::new("sin(x)").with_samples(5));
    }
}
