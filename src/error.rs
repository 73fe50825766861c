// src/error.rs

use thiserror::Error;

/// Raised synchronously when computation inputs cannot describe a waveform.
///
/// There is only one error kind; the variants narrow down the message shown
/// to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("cosine and sine coefficient counts differ ({cosine} vs {sine})")]
    MismatchedCoefficients { cosine: usize, sine: usize },

    #[error("period must be positive, got {0}")]
    NonPositivePeriod(f64),

    #[error("duration must be positive and finite, got {0}")]
    NonPositiveDuration(f64),

    #[error("at least 2 samples are required, got {0}")]
    TooFewSamples(usize),

    #[error("invalid range for {field}: min {min} is greater than max {max}")]
    InvalidRange { field: String, min: f64, max: f64 },
}

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("failed to read or write config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ConfigurationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = ConfigurationError::MismatchedCoefficients { cosine: 3, sine: 2 };
        assert_eq!(
            err.to_string(),
            "cosine and sine coefficient counts differ (3 vs 2)"
        );
        assert_eq!(
            ConfigurationError::TooFewSamples(1).to_string(),
            "at least 2 samples are required, got 1"
        );
        assert_eq!(
            ConfigurationError::NonPositiveDuration(-1.0).to_string(),
            "duration must be positive and finite, got -1"
        );
    }

    #[test]
    fn validation_errors_convert_into_file_errors() {
        let err: ConfigFileError = ConfigurationError::NonPositivePeriod(0.0).into();
        assert!(matches!(err, ConfigFileError::Invalid(_)));
    }
}
