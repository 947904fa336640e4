//! FIR Scope - FIR filter and waveform spectral analysis core
//! 
//! Frequency response evaluation for FIR taps and short-time spectrograms of
//! decoded audio, with optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod db;
pub mod error;
pub mod filters;
pub mod response;
pub mod spectrum;
pub mod waveform;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{AnalysisError, Result};
pub use filters::{FilterCoefficients, RationalResampler, WindowType};
pub use response::{compute_response, FrequencyGrid, FrequencyResponseEngine, FrequencyScale};
pub use spectrum::{compute_spectrogram, SpectrogramEngine, SpectrogramGrid};
pub use waveform::Waveform;
