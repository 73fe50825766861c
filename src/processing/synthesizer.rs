// src/processing/synthesizer.rs

use super::waveform::SampledWaveform;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// One configured sinusoid: A·sin(2π·f·t + θ) and its cosine twin.
///
/// Any real value is accepted, including zero or negative frequency.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SignalParameters {
    pub amplitude: f64,
    pub frequency_hz: f64,
    pub phase_rad: f64,
}

impl SignalParameters {
    pub fn new(amplitude: f64, frequency_hz: f64, phase_rad: f64) -> Self {
        Self {
            amplitude,
            frequency_hz,
            phase_rad,
        }
    }

    fn argument(&self, t: f64) -> f64 {
        2.0 * PI * self.frequency_hz * t + self.phase_rad
    }

    pub fn sine_at(&self, t: f64) -> f64 {
        self.amplitude * self.argument(t).sin()
    }

    pub fn cosine_at(&self, t: f64) -> f64 {
        self.amplitude * self.argument(t).cos()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisResult {
    pub sines: Vec<SampledWaveform>,
    pub cosines: Vec<SampledWaveform>,
    /// Sum of every sine AND every cosine contribution.
    pub sum: SampledWaveform,
}

/// Samples each signal's sine and cosine over `time_axis` and their total.
pub fn synthesize(signals: &[SignalParameters], time_axis: &[f64]) -> SynthesisResult {
    let mut sines = Vec::with_capacity(signals.len());
    let mut cosines = Vec::with_capacity(signals.len());
    let mut sum = SampledWaveform::zeros(time_axis);

    for signal in signals {
        let sine = SampledWaveform::from_fn(time_axis, |t| signal.sine_at(t));
        let cosine = SampledWaveform::from_fn(time_axis, |t| signal.cosine_at(t));

        sum = sum.added(&sine).added(&cosine);
        sines.push(sine);
        cosines.push(cosine);
    }

    SynthesisResult { sines, cosines, sum }
}
