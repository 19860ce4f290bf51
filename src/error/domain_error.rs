use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
/// Represents all the ways a sampling domain can be invalid.
pub enum DomainError {
    /// The lower bound is not strictly below the upper bound.
    #[error("Invalid domain: minimum {min} must be less than maximum {max}.")]
    EmptyRange {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
    /// A bound is NaN or infinite.
    #[error("Invalid domain: bounds must be finite, found [{min}, {max}].")]
    NonFiniteBound {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
    /// Fewer than two samples were requested.
    #[error("Invalid domain: at least 2 samples are required, found {count}.")]
    TooFewSamples {
        /// Requested sample count.
        count: usize,
    },
    /// The sample count cannot be represented exactly as a float.
    #[error("Invalid domain: sample count {count} is too large.")]
    TooManySamples {
        /// Requested sample count.
        count: usize,
    },
}
