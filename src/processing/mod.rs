// src/processing/mod.rs

// Pure numeric core: no UI, no I/O, no shared state. Every function here can
// be called from any thread.

pub mod fourier;
pub mod reference;
pub mod synthesizer;
pub mod waveform;

pub use fourier::{reconstruct, FourierParameters};
pub use reference::{ReferenceTable, REFERENCE_TABLE};
pub use synthesizer::{synthesize, SignalParameters, SynthesisResult};
pub use waveform::{linspace, SampledWaveform};
