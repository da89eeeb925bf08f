use num_traits::Float;

use crate::error::{FilterError, Result};

/// One side of a rational transfer function after gain extraction.
///
/// Every coefficient is divided by the leading coefficient, which is retained
/// separately as the gain. The scaled leading term is always exactly 1 and is
/// never referenced by the filter recurrence, so only the tail (terms paired
/// with delayed state) is stored.
#[derive(Debug, Clone)]
pub struct ScaledCoefficients<T> {
    gain: T,
    tail: Vec<T>,
}

impl<T: Float> ScaledCoefficients<T> {
    /// Scale a coefficient set by its leading element.
    ///
    /// `label` names the side ("numerator" or "denominator") in error
    /// messages.
    ///
    /// # Errors
    /// Returns `FilterError::EmptyCoefficients` for an empty list and
    /// `FilterError::ZeroLeadingCoefficient` when the leading element cannot
    /// be used as the normalization divisor.
    pub fn new(label: &'static str, coefficients: &[T]) -> Result<Self> {
        let Some((&leading, rest)) = coefficients.split_first() else {
            return Err(FilterError::EmptyCoefficients(label));
        };
        if leading == T::zero() {
            return Err(FilterError::ZeroLeadingCoefficient(label));
        }

        Ok(Self {
            gain: leading,
            tail: rest.iter().map(|&c| c / leading).collect(),
        })
    }

    /// The leading coefficient extracted during scaling.
    pub fn gain(&self) -> T {
        self.gain
    }

    /// Scaled coefficients past the leading term.
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// Number of coefficients in the original set, leading term included.
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Weighted sum of the delay line against the scaled tail.
    ///
    /// Terms with an exactly-zero coefficient are skipped; adding zero
    /// contributes nothing, so the result is identical to the full
    /// summation.
    pub fn reduce(&self, state: &[T]) -> T {
        let mut acc = T::zero();
        for (&c, &s) in self.tail.iter().zip(state) {
            if c != T::zero() {
                acc = acc + c * s;
            }
        }
        acc
    }
}
