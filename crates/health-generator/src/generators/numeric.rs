//! Numeric value samplers.

use health_core::{round1, FloatRange, IntRange};
use rand::Rng;

/// Sample an integer uniformly in the given range (inclusive).
pub fn sample_int<R: Rng>(rng: &mut R, range: IntRange) -> u32 {
    rng.random_range(range.min..=range.max)
}

/// Sample a float uniformly in the given range (inclusive), without rounding.
pub fn sample_float<R: Rng>(rng: &mut R, range: FloatRange) -> f64 {
    rng.random_range(range.min..=range.max)
}

/// Sample a float and round it to one decimal.
///
/// The rounded value is clamped back into the range, so bounds that are not
/// on a 0.1 grid still hold.
pub fn sample_float_1dp<R: Rng>(rng: &mut R, range: FloatRange) -> f64 {
    round1(sample_float(rng, range)).clamp(range.min, range.max)
}

/// Scaling applied to age-dependent lab values: 1% per year away from 30.
pub fn age_factor(age: u32) -> f64 {
    1.0 + (age as f64 - 30.0) * 0.01
}
