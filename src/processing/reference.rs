// src/processing/reference.rs

use super::fourier::FourierParameters;

/// Canned coefficient table loaded by the "analyze" action.
///
/// The values describe one known periodic waveform used for teaching. Nothing
/// in the crate derives them; they are a fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTable {
    /// True a0 (not halved).
    pub a0: f64,
    /// a1..a7
    pub cosine: [f64; 7],
    /// b1..b7
    pub sine: [f64; 7],
}

pub const REFERENCE_TABLE: ReferenceTable = ReferenceTable {
    a0: 0.0,
    cosine: [0.8106, 0.0, 0.0901, 0.0, 0.0324, 0.0, 0.0165],
    sine: [0.0; 7],
};

impl ReferenceTable {
    pub fn harmonics(&self) -> usize {
        self.cosine.len()
    }

    /// a_k for k >= 1; harmonics outside the table are zero.
    pub fn a(&self, k: usize) -> f64 {
        k.checked_sub(1)
            .and_then(|i| self.cosine.get(i))
            .copied()
            .unwrap_or(0.0)
    }

    /// b_k for k >= 1; harmonics outside the table are zero.
    pub fn b(&self, k: usize) -> f64 {
        k.checked_sub(1)
            .and_then(|i| self.sine.get(i))
            .copied()
            .unwrap_or(0.0)
    }

    /// The table truncated or zero-padded to `harmonics` terms, with the
    /// caller's fundamental and period.
    pub fn to_parameters(
        &self,
        harmonics: usize,
        fundamental_angular_freq: f64,
        period: f64,
    ) -> FourierParameters {
        FourierParameters {
            dc_term: self.a0,
            cosine_coeffs: (1..=harmonics).map(|k| self.a(k)).collect(),
            sine_coeffs: (1..=harmonics).map(|k| self.b(k)).collect(),
            fundamental_angular_freq,
            period,
        }
    }
}
