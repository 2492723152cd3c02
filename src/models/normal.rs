// Standard normal CDF implementations. Both go through erfc rather than erf so
// the lower tail keeps its relative precision instead of cancelling against 1.

use std::f64::consts::SQRT_2;

use crate::models::traits::StandardNormalCdf;

/// Φ(x) = ½·erfc(−x/√2) using `libm`'s erfc. This is the default CDF of the
/// pricer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErfcNormalCdf;

impl StandardNormalCdf for ErfcNormalCdf {
    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        0.5 * libm::erfc(-x / SQRT_2)
    }
}

/// Φ backed by the `statrs` error function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatrsNormalCdf;

impl StandardNormalCdf for StatrsNormalCdf {
    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        0.5 * statrs::function::erf::erfc(-x / SQRT_2)
    }
}
