use crate::{error::DomainError, util::num::usize_to_f64_checked};

/// Number of samples taken when the caller does not ask for a specific count.
pub const DEFAULT_SAMPLE_COUNT: usize = 100;
/// Lower bound used when the caller does not supply one.
pub const DEFAULT_DOMAIN_MIN: f64 = -10.0;
/// Upper bound used when the caller does not supply one.
pub const DEFAULT_DOMAIN_MAX: f64 = 10.0;

/// An ordered, non-decreasing sequence of evaluation points.
///
/// Only [`sample`] builds a `Domain`, so every instance holds at least two
/// points, starts at its lower bound and ends exactly at its upper bound.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    points: Vec<f64>,
}

impl Domain {
    /// Returns the sample points.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.points
    }

    /// Returns the number of sample points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the first sample point.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.points.first().copied().unwrap_or(f64::NAN)
    }

    /// Returns the last sample point.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.points.last().copied().unwrap_or(f64::NAN)
    }
}

/// Produces `count` evenly spaced points from `min` to `max`, both included.
///
/// Point `i` is `min + i * (max - min) / (count - 1)`, clamped to `max`; the
/// last point is pinned to `max` so rounding never moves the endpoint. Bounds
/// whose distance overflows `f64` are spaced at half scale, so every point
/// stays finite.
///
/// # Errors
/// - `NonFiniteBound` if either bound is NaN or infinite.
/// - `EmptyRange` if `min >= max`.
/// - `TooFewSamples` if `count < 2`.
/// - `TooManySamples` if `count` cannot be represented exactly as `f64`.
///
/// # Example
/// ```
/// use graphfx::sampler::sample;
///
/// let domain = sample(0.0, 1.0, 5).unwrap();
/// assert_eq!(domain.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
///
/// assert!(sample(1.0, 1.0, 5).is_err());
/// assert!(sample(0.0, 1.0, 1).is_err());
/// ```
pub fn sample(min: f64, max: f64, count: usize) -> Result<Domain, DomainError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(DomainError::NonFiniteBound { min, max });
    }
    if min >= max {
        return Err(DomainError::EmptyRange { min, max });
    }
    if count < 2 {
        return Err(DomainError::TooFewSamples { count });
    }

    let intervals = usize_to_f64_checked(count - 1, DomainError::TooManySamples { count })?;
    let (scale, low, high) = if (max - min).is_finite() {
        (1.0, min, max)
    } else {
        (2.0, min / 2.0, max / 2.0)
    };
    let step = (high - low) / intervals;

    let mut points = Vec::with_capacity(count);
    let mut offset = 0.0;
    for _ in 0..count - 1 {
        points.push((scale * (low + offset * step)).min(max));
        offset += 1.0;
    }
    points.push(max);

    log::debug!("sampled {count} points over [{min}, {max}]");

    Ok(Domain { points })
}
