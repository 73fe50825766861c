// src/config/mod.rs
use crate::error::{ConfigFileError, ConfigurationError};
use crate::visualization::VisualizationConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub processor: ProcessorConfig,
    pub synthesis: SynthesisConfig,
    pub fourier: FourierConfig,
    pub visualization: VisualizationConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ProcessorConfig {
    pub verbose: bool,
    pub enable_debug_logging: bool,
}

/// Bounds and initial value of one numeric input field.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl FieldRange {
    pub const fn new(min: f64, max: f64, step: f64, default: f64) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    pub fn validate(&self, field: &str) -> Result<(), ConfigurationError> {
        if !(self.min <= self.max) {
            return Err(ConfigurationError::InvalidRange {
                field: field.to_string(),
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SynthesisConfig {
    pub signal_count: usize,
    pub duration_s: f64,
    pub sample_count: usize,
    pub amplitude: FieldRange,
    pub frequency: FieldRange,
    pub phase: FieldRange,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            signal_count: 3,
            duration_s: 1.0,
            sample_count: 1000,
            amplitude: FieldRange::new(-1000.0, 1000.0, 1.0, 1.0),
            frequency: FieldRange::new(0.0, 1000.0, 1.0, 1.0),
            phase: FieldRange::new(-3.1416, 3.1416, 0.1, 0.0),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FourierConfig {
    pub harmonics: usize,
    pub sample_count: usize,
    pub coefficient: FieldRange,
    pub angular_frequency: FieldRange,
    pub period: FieldRange,
}

impl Default for FourierConfig {
    fn default() -> Self {
        Self {
            harmonics: 3,
            sample_count: 1000,
            coefficient: FieldRange::new(-1000.0, 1000.0, 1.0, 0.0),
            angular_frequency: FieldRange::new(-1000.0, 1000.0, 1.0, 1.0),
            period: FieldRange::new(-1000.0, 1000.0, 1.0, 1.0),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for sample_count in [self.synthesis.sample_count, self.fourier.sample_count] {
            if sample_count < 2 {
                return Err(ConfigurationError::TooFewSamples(sample_count));
            }
        }
        let period = self.fourier.period.default;
        if !(period > 0.0 && period.is_finite()) {
            return Err(ConfigurationError::NonPositivePeriod(period));
        }
        let duration = self.synthesis.duration_s;
        if !(duration > 0.0 && duration.is_finite()) {
            return Err(ConfigurationError::NonPositiveDuration(duration));
        }

        self.synthesis.amplitude.validate("amplitude")?;
        self.synthesis.frequency.validate("frequency")?;
        self.synthesis.phase.validate("phase")?;
        self.fourier.coefficient.validate("coefficient")?;
        self.fourier.angular_frequency.validate("angular_frequency")?;
        self.fourier.period.validate("period")?;
        Ok(())
    }

    pub fn from_yaml(yaml: &str) -> Result<AppConfig, ConfigFileError> {
        let config: AppConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigFileError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigFileError> {
    let config_str = fs::read_to_string(path)?;
    AppConfig::from_yaml(&config_str)
}

pub fn save_config<P: AsRef<Path>>(config: &AppConfig, path: P) -> Result<(), ConfigFileError> {
    let yaml = config.to_yaml()?;
    fs::write(path, yaml)?;
    Ok(())
}
