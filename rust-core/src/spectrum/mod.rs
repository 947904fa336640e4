//! Spectral analysis with FFT

pub mod fft;
pub mod windowing;
pub mod spectrogram;

pub use fft::FftEngine;
pub use windowing::apply_window;
pub use spectrogram::{
    compute_spectrogram, frame_count, SpectrogramConfig, SpectrogramEngine, SpectrogramGrid,
    SpectrogramScaling,
};
