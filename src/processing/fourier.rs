// src/processing/fourier.rs

use super::waveform::{linspace, SampledWaveform};
use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};

/// Truncated Fourier series over one period.
///
/// `dc_term` is the true a0 coefficient; the series contributes `a0 / 2`.
/// `cosine_coeffs[k - 1]` and `sine_coeffs[k - 1]` weight harmonic k.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FourierParameters {
    pub dc_term: f64,
    pub cosine_coeffs: Vec<f64>,
    pub sine_coeffs: Vec<f64>,
    pub fundamental_angular_freq: f64,
    pub period: f64,
}

impl FourierParameters {
    /// Number of harmonics K, checked against the sine coefficients.
    pub fn harmonic_count(&self) -> Result<usize, ConfigurationError> {
        if self.cosine_coeffs.len() != self.sine_coeffs.len() {
            return Err(ConfigurationError::MismatchedCoefficients {
                cosine: self.cosine_coeffs.len(),
                sine: self.sine_coeffs.len(),
            });
        }
        Ok(self.cosine_coeffs.len())
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.harmonic_count()?;
        // NaN fails this check too
        if !(self.period > 0.0 && self.period.is_finite()) {
            return Err(ConfigurationError::NonPositivePeriod(self.period));
        }
        Ok(())
    }

    /// Evaluates the series at a single time `t`.
    pub fn value_at(&self, t: f64) -> f64 {
        let omega0 = self.fundamental_angular_freq;
        let harmonics: f64 = self
            .cosine_coeffs
            .iter()
            .zip(self.sine_coeffs.iter())
            .enumerate()
            .map(|(i, (a_k, b_k))| {
                let k_omega_t = (i + 1) as f64 * omega0 * t;
                a_k * k_omega_t.cos() + b_k * k_omega_t.sin()
            })
            .sum();
        self.dc_term / 2.0 + harmonics
    }
}

/// Samples the series at `sample_count` evenly spaced points over `[0, period]`.
pub fn reconstruct(
    params: &FourierParameters,
    sample_count: usize,
) -> Result<SampledWaveform, ConfigurationError> {
    params.validate()?;
    if sample_count < 2 {
        return Err(ConfigurationError::TooFewSamples(sample_count));
    }

    let time_axis = linspace(0.0, params.period, sample_count);
    Ok(SampledWaveform::from_fn(&time_axis, |t| params.value_at(t)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn params(cos: Vec<f64>, sin: Vec<f64>, omega0: f64, period: f64) -> FourierParameters {
        FourierParameters {
            dc_term: 0.0,
            cosine_coeffs: cos,
            sine_coeffs: sin,
            fundamental_angular_freq: omega0,
            period,
        }
    }

    #[test]
    fn dc_only_series_is_half_the_dc_term() {
        let p = FourierParameters {
            dc_term: 2.0,
            ..params(vec![0.0], vec![0.0], 1.0, 6.283185)
        };
        let waveform = reconstruct(&p, 5).unwrap();

        assert_eq!(waveform.len(), 5);
        for &v in waveform.amplitude_axis() {
            assert_abs_diff_eq!(v, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn time_axis_spans_exactly_one_period() {
        let p = params(vec![1.0, 0.5, 0.25], vec![0.0, 0.1, 0.0], 2.0, 3.5);
        let waveform = reconstruct(&p, 1000).unwrap();
        let t = waveform.time_axis();
        assert_eq!(t.len(), 1000);
        assert_eq!(t[0], 0.0);
        assert_eq!(t[999], 3.5);
        assert_eq!(waveform.amplitude_axis().len(), t.len());
    }

    #[test]
    fn closed_fundamental_period_repeats() {
        // omega0 * T = 2π * 3
        let period = 1.5;
        let omega0 = 2.0 * PI * 3.0 / period;
        let p = FourierParameters {
            dc_term: 0.4,
            ..params(vec![0.8106, 0.0, 0.0901], vec![0.3, -0.2, 0.05], omega0, period)
        };
        let waveform = reconstruct(&p, 257).unwrap();
        let amp = waveform.amplitude_axis();
        assert_abs_diff_eq!(amp[0], amp[amp.len() - 1], epsilon = 1e-9);
    }

    #[test]
    fn single_harmonic_matches_closed_form() {
        let p = params(vec![2.0], vec![3.0], 1.0, 2.0 * PI);
        let waveform = reconstruct(&p, 101).unwrap();
        for (&t, &v) in waveform.time_axis().iter().zip(waveform.amplitude_axis()) {
            assert_abs_diff_eq!(v, 2.0 * t.cos() + 3.0 * t.sin(), epsilon = 1e-12);
        }
    }

    #[test]
    fn harmonic_index_scales_the_frequency() {
        let p = params(vec![0.0, 0.0, 1.0], vec![0.0, 0.0, 0.0], 1.0, 2.0 * PI);
        assert_abs_diff_eq!(p.value_at(PI / 3.0), (PI).cos(), epsilon = 1e-12);
    }

    #[test]
    fn arbitrary_harmonic_count_is_supported() {
        let p = params(vec![0.1; 12], vec![0.0; 12], 1.0, 1.0);
        assert_eq!(p.harmonic_count().unwrap(), 12);
        assert_abs_diff_eq!(reconstruct(&p, 3).unwrap().amplitude_axis()[0], 1.2, epsilon = 1e-12);
    }

    #[test]
    fn mismatched_coefficient_lengths_are_rejected() {
        let p = params(vec![0.0; 3], vec![0.0; 2], 1.0, 1.0);
        assert_eq!(
            reconstruct(&p, 100),
            Err(ConfigurationError::MismatchedCoefficients { cosine: 3, sine: 2 })
        );
    }

    #[test]
    fn fewer_than_two_samples_are_rejected() {
        let p = params(vec![1.0], vec![1.0], 1.0, 1.0);
        assert_eq!(reconstruct(&p, 1), Err(ConfigurationError::TooFewSamples(1)));
        assert_eq!(reconstruct(&p, 0), Err(ConfigurationError::TooFewSamples(0)));
    }

    #[test]
    fn non_positive_period_is_rejected() {
        let zero = params(vec![], vec![], 1.0, 0.0);
        assert_eq!(
            reconstruct(&zero, 10),
            Err(ConfigurationError::NonPositivePeriod(0.0))
        );
        let negative = params(vec![], vec![], 1.0, -2.0);
        assert!(reconstruct(&negative, 10).is_err());
        let nan = params(vec![], vec![], 1.0, f64::NAN);
        assert!(reconstruct(&nan, 10).is_err());
        let infinite = params(vec![], vec![], 1.0, f64::INFINITY);
        assert_eq!(
            reconstruct(&infinite, 10),
            Err(ConfigurationError::NonPositivePeriod(f64::INFINITY))
        );
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let p = params(vec![0.5, 0.25], vec![-0.1, 0.9], 3.0, 2.0);
        assert_eq!(reconstruct(&p, 400), reconstruct(&p, 400));
    }
}
