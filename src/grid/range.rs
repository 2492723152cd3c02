use std::ops::Index;

use crate::error::{PricingError, PricingResult};

/// Evenly spaced, inclusive axis of parameter values (spot or volatility).
///
/// A single-point range contains only `min`. For two or more points the last
/// value is exactly `max`, not `min + (max - min)` rounded.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterRange {
    min: f64,
    max: f64,
    values: Vec<f64>,
}

impl ParameterRange {
    /// Build `count` evenly spaced values in `[min, max]`.
    ///
    /// # Errors
    ///
    /// [`PricingError::InvalidParameter`] if `count < 1`, `min > max`, or
    /// either bound is not finite.
    pub fn new(min: f64, max: f64, count: usize) -> PricingResult<Self> {
        Self::check_bounds(min, max, count)?;

        let values = if count == 1 || min == max {
            vec![min; count]
        } else {
            let last = count - 1;
            (0..count)
                .map(|i| {
                    if i == last {
                        max
                    } else {
                        // Weighted form; max - min can overflow for finite bounds
                        let t = i as f64 / last as f64;
                        min * (1.0 - t) + max * t
                    }
                })
                .collect()
        };

        Ok(Self { min, max, values })
    }

    /// Validate range bounds without materialising the values.
    pub fn check_bounds(min: f64, max: f64, count: usize) -> PricingResult<()> {
        if !min.is_finite() || !max.is_finite() {
            return Err(PricingError::invalid_parameter(format!(
                "range bounds must be finite, got [{}, {}]",
                min, max
            )));
        }
        if count < 1 {
            return Err(PricingError::invalid_parameter(
                "range must contain at least one point",
            ));
        }
        if min > max {
            return Err(PricingError::invalid_parameter(format!(
                "range minimum {} exceeds maximum {}",
                min, max
            )));
        }
        Ok(())
    }

    /// One-point range at `value`.
    pub fn single(value: f64) -> PricingResult<Self> {
        Self::new(value, value, 1)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; a range holds at least one point.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl Index<usize> for ParameterRange {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

impl<'a> IntoIterator for &'a ParameterRange {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
