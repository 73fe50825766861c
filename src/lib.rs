pub mod config;
pub mod error;
pub mod processing;
pub mod utils;
pub mod visualization;

pub use error::{ConfigFileError, ConfigurationError};
pub use processing::{
    reconstruct, synthesize, FourierParameters, SampledWaveform, SignalParameters,
    SynthesisResult,
};
