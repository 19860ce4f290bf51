/// Numeric conversion helpers.
///
/// Provides checked conversions from integer counts to `f64` that refuse to
/// lose precision silently.
pub mod num;
