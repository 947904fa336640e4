//! FIR taps, window functions and rational resampling

pub mod windows;
pub mod coefficients;
pub mod resample;

pub use windows::{WindowType, generate_window};
pub use coefficients::FilterCoefficients;
pub use resample::RationalResampler;
