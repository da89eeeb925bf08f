use num_traits::Float;

use crate::dsp::coefficients::ScaledCoefficients;
use crate::error::Result;

/// Generic linear-time-invariant digital filter
///
/// Evaluates an arbitrary-order IIR/FIR transfer function given as numerator
/// ("B", feed-forward) and denominator ("A", feedback) coefficient lists,
/// using a Direct-Form-II recurrence: one delay line of intermediate values
/// is shared between the feed-forward and feedback paths.
///
/// Both coefficient lists are normalized by their leading coefficient at
/// construction, so the per-sample hot path performs no division; the
/// extracted gains collapse into a single output multiply.
#[derive(Debug, Clone)]
pub struct DigitalFilter<T> {
    numerator: ScaledCoefficients<T>,
    denominator: ScaledCoefficients<T>,
    gain: T,
    state: Vec<T>,
}

impl<T: Float> DigitalFilter<T> {
    /// Create a filter from raw coefficient lists, highest delay last.
    ///
    /// The delay line is sized to the longer of the two lists and starts
    /// zeroed.
    ///
    /// # Errors
    /// Returns a configuration error if either list is empty or has a zero
    /// leading coefficient.
    pub fn new(numerator: &[T], denominator: &[T]) -> Result<Self> {
        let numerator = ScaledCoefficients::new("numerator", numerator)?;
        let denominator = ScaledCoefficients::new("denominator", denominator)?;
        let gain = numerator.gain() / denominator.gain();
        let state = vec![T::zero(); numerator.len().max(denominator.len())];

        Ok(Self {
            numerator,
            denominator,
            gain,
            state,
        })
    }

    /// Process a single sample through the filter.
    ///
    /// `state[0]` holds the most recent intermediate value, increasing index
    /// reaches further into the past. The denominator's leading coefficient
    /// is 1 after scaling and is accounted for by the recurrence itself, so
    /// neither weighted sum includes a leading term.
    pub fn filter(&mut self, x: T) -> T {
        let v = x - self.denominator.reduce(&self.state);
        let y = self.gain * (v + self.numerator.reduce(&self.state));
        self.shift_in(v);
        y
    }

    /// Zero the delay line. Idempotent; coefficients and gain are untouched.
    pub fn reset(&mut self) {
        self.state.fill(T::zero());
    }

    /// True when feedback is present (any non-leading denominator
    /// coefficient). Informational; does not change filtering behavior.
    pub fn is_iir(&self) -> bool {
        !self.denominator.tail().is_empty()
    }

    /// True for a pure feed-forward filter.
    pub fn is_fir(&self) -> bool {
        !self.is_iir()
    }

    /// Overall gain, `B[0] / A[0]`.
    pub fn gain(&self) -> T {
        self.gain
    }

    /// Length of the delay line, `max(|B|, |A|)`.
    pub fn state_len(&self) -> usize {
        self.state.len()
    }

    // Drop the oldest intermediate value and store the newest at index 0.
    fn shift_in(&mut self, v: T) {
        self.state.rotate_right(1);
        self.state[0] = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;
    use approx::assert_relative_eq;

    fn band_pass() -> DigitalFilter<f32> {
        DigitalFilter::new(
            &[0.292_893_22, 0.0, -0.292_893_22],
            &[1.0, -0.585_786_44, 0.414_213_56],
        )
        .unwrap()
    }

    /// Direct-Form-I reference: y[n] = (Σ b_i·x[n-i] − Σ a_i·y[n-i]) / a_0.
    fn direct_form_1(b: &[f64], a: &[f64], input: &[f64]) -> Vec<f64> {
        let mut output = Vec::with_capacity(input.len());
        for n in 0..input.len() {
            let mut acc = 0.0;
            for (i, &bi) in b.iter().enumerate() {
                if n >= i {
                    acc += bi * input[n - i];
                }
            }
            for (i, &ai) in a.iter().enumerate().skip(1) {
                if n >= i {
                    acc -= ai * output[n - i];
                }
            }
            output.push(acc / a[0]);
        }
        output
    }

    #[test]
    fn test_construction_rejects_bad_coefficients() {
        assert!(matches!(
            DigitalFilter::<f32>::new(&[], &[1.0]).unwrap_err(),
            FilterError::EmptyCoefficients("numerator")
        ));
        assert!(matches!(
            DigitalFilter::new(&[1.0f32], &[0.0, 1.0]).unwrap_err(),
            FilterError::ZeroLeadingCoefficient("denominator")
        ));
    }

    #[test]
    fn test_state_sized_to_longer_side() {
        let fir = DigitalFilter::new(&[0.25f32, 0.25, 0.25, 0.25], &[1.0]).unwrap();
        assert_eq!(fir.state_len(), 4);
        assert!(fir.is_fir());

        let iir = band_pass();
        assert_eq!(iir.state_len(), 3);
        assert!(iir.is_iir());
    }

    #[test]
    fn test_unity_filter_is_identity() {
        let mut filter = DigitalFilter::new(&[1.0f32], &[1.0]).unwrap();
        for x in [0.0, 1.0, -2.5, 3.75, 0.125] {
            assert_eq!(filter.filter(x), x);
        }
    }

    #[test]
    fn test_first_output_is_pure_gain() {
        // Zeroed state makes the first output x · B[0]/A[0].
        let mut filter = band_pass();
        assert_relative_eq!(filter.filter(1.0), 0.292_893_22, max_relative = 1e-6);
    }

    #[test]
    fn test_matches_direct_form_1_reference() {
        let b = [0.292_893_22f64, 0.0, -0.292_893_22];
        let a = [1.0f64, -0.585_786_44, 0.414_213_56];
        let input: Vec<f64> = (0..64).map(|i| ((i * 7 % 13) as f64 - 6.0) / 6.0).collect();

        let mut filter = DigitalFilter::new(&b, &a).unwrap();
        let expected = direct_form_1(&b, &a, &input);

        for (&x, &want) in input.iter().zip(expected.iter()) {
            assert_relative_eq!(filter.filter(x), want, max_relative = 1e-9, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_normalization_cancels_denominator_scale() {
        // Scaling every coefficient of both sides by the same factor must not
        // change the output.
        let input = [1.0f64, 0.5, -0.25, 2.0, -1.0, 0.0, 0.75];

        let mut reference = DigitalFilter::new(&[0.5, 0.25], &[1.0, -0.3]).unwrap();
        let mut scaled = DigitalFilter::new(&[2.0, 1.0], &[4.0, -1.2]).unwrap();

        for &x in &input {
            assert_relative_eq!(scaled.filter(x), reference.filter(x), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_reset_is_idempotent_and_restores_initial_behavior() {
        let mut filter = band_pass();
        let mut fresh = band_pass();

        for x in [1.0, -0.5, 0.25, 2.0] {
            filter.filter(x);
        }

        filter.reset();
        filter.reset();

        // Same outputs as a freshly constructed engine, bit for bit.
        for x in [0.0, 1.0, -1.0, 0.5] {
            assert_eq!(filter.filter(x), fresh.filter(x));
        }
    }

    #[test]
    fn test_fir_passthrough_after_transient() {
        // B = {1}, A = {1} is an identity transform; the transient cannot be
        // longer than the one-slot delay line.
        let mut filter = DigitalFilter::new(&[1.0f32], &[1.0]).unwrap();
        let input = [0.5f32, -1.5, 3.0, 0.0, -0.25];
        for &x in &input {
            assert_eq!(filter.filter(x), x);
        }
    }
}
