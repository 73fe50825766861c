// src/visualization/forms.rs

// Input forms sitting between the window and the numeric core.
//
// The Fourier form shows "a0/2" rather than a0 so its first field lines up with
// the a_k / b_k pattern. That is display only: `FourierForm::parameters`
// doubles the field on read and `FourierForm::set_parameters` halves on write,
// so `FourierParameters::dc_term` always holds the true a0.

use crate::config::{FieldRange, FourierConfig, SynthesisConfig};
use crate::processing::{FourierParameters, ReferenceTable, SignalParameters};

/// A numeric input clamped to its configured range.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericField {
    pub label: String,
    pub range: FieldRange,
    value: f64,
}

impl NumericField {
    pub fn new(label: impl Into<String>, range: FieldRange) -> Self {
        let mut field = Self {
            label: label.into(),
            range,
            value: 0.0,
        };
        field.set(range.default);
        field
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Stores `value` clamped to `[min, max]`. NaN leaves the field unchanged.
    ///
    /// An inverted range pins the value to `max` instead of panicking; such
    /// ranges are rejected by `AppConfig::validate`.
    pub fn set(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        self.value = value.max(self.range.min).min(self.range.max);
    }

    pub fn reset(&mut self) {
        self.set(self.range.default);
    }

    /// Mutable access for widgets; call `clamp` once the widget is done.
    pub fn value_mut(&mut self) -> &mut f64 {
        &mut self.value
    }

    pub fn clamp(&mut self) {
        let value = self.value;
        if value.is_nan() {
            self.reset();
        } else {
            self.set(value);
        }
    }
}

// SIGNAL FORM -----------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SignalForm {
    pub index: usize,
    pub amplitude: NumericField,
    pub frequency: NumericField,
    pub phase: NumericField,
}

impl SignalForm {
    pub fn new(index: usize, config: &SynthesisConfig) -> Self {
        Self {
            index,
            amplitude: NumericField::new("A:", config.amplitude),
            frequency: NumericField::new("f (Hz):", config.frequency),
            phase: NumericField::new("θ (rad):", config.phase),
        }
    }

    pub fn title(&self) -> String {
        format!("Signal {}", self.index)
    }

    pub fn parameters(&self) -> SignalParameters {
        SignalParameters::new(
            self.amplitude.value(),
            self.frequency.value(),
            self.phase.value(),
        )
    }

    pub fn fields_mut(&mut self) -> [&mut NumericField; 3] {
        [&mut self.amplitude, &mut self.frequency, &mut self.phase]
    }
}

/// One form per configured signal, numbered from 1.
pub fn signal_forms(config: &SynthesisConfig) -> Vec<SignalForm> {
    (1..=config.signal_count)
        .map(|index| SignalForm::new(index, config))
        .collect()
}

// FOURIER FORM ----------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct FourierForm {
    /// Holds a0 / 2.
    pub half_dc: NumericField,
    pub cosine: Vec<NumericField>,
    pub sine: Vec<NumericField>,
    pub angular_frequency: NumericField,
    pub period: NumericField,
}

impl FourierForm {
    pub fn new(config: &FourierConfig) -> Self {
        let harmonics = 1..=config.harmonics;
        Self {
            half_dc: NumericField::new("a0/2:", config.coefficient),
            cosine: harmonics
                .clone()
                .map(|k| NumericField::new(format!("a{}:", k), config.coefficient))
                .collect(),
            sine: harmonics
                .map(|k| NumericField::new(format!("b{}:", k), config.coefficient))
                .collect(),
            angular_frequency: NumericField::new("ω0 (rad/s):", config.angular_frequency),
            period: NumericField::new("T (s):", config.period),
        }
    }

    pub fn harmonics(&self) -> usize {
        self.cosine.len()
    }

    /// Reads the form; the a0/2 field is doubled here.
    pub fn parameters(&self) -> FourierParameters {
        FourierParameters {
            dc_term: self.half_dc.value() * 2.0,
            cosine_coeffs: self.cosine.iter().map(NumericField::value).collect(),
            sine_coeffs: self.sine.iter().map(NumericField::value).collect(),
            fundamental_angular_freq: self.angular_frequency.value(),
            period: self.period.value(),
        }
    }

    /// Writes `params` into the form; the true a0 is halved here. Harmonics
    /// beyond the form's slots are dropped and unfilled slots are zeroed.
    pub fn set_parameters(&mut self, params: &FourierParameters) {
        self.half_dc.set(params.dc_term / 2.0);
        for (k, field) in self.cosine.iter_mut().enumerate() {
            field.set(params.cosine_coeffs.get(k).copied().unwrap_or(0.0));
        }
        for (k, field) in self.sine.iter_mut().enumerate() {
            field.set(params.sine_coeffs.get(k).copied().unwrap_or(0.0));
        }
        self.angular_frequency.set(params.fundamental_angular_freq);
        self.period.set(params.period);
    }

    /// Loads the fixed reference table, keeping the current ω0 and T.
    pub fn apply_reference(&mut self, table: &ReferenceTable) {
        let params = table.to_parameters(
            self.harmonics(),
            self.angular_frequency.value(),
            self.period.value(),
        );
        self.set_parameters(&params);
    }

    /// Every field in display order: a0/2, a1..aK, b1..bK, ω0, T.
    pub fn fields_mut(&mut self) -> Vec<&mut NumericField> {
        let mut fields = Vec::with_capacity(3 + 2 * self.harmonics());
        fields.push(&mut self.half_dc);
        fields.extend(self.cosine.iter_mut());
        fields.extend(self.sine.iter_mut());
        fields.push(&mut self.angular_frequency);
        fields.push(&mut self.period);
        fields
    }
}
