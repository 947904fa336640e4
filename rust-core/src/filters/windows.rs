//! Window functions for spectral analysis
//!
//! Symmetric forms over n = 0..M-1, matching the tapers used by
//! conventional spectrogram plots.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowType {
    /// Hann window: w[n] = 0.5 - 0.5*cos(2πn/(M-1))
    /// Sidelobe attenuation: ~31 dB, zero at both ends
    #[default]
    Hann,

    /// Hamming window: w[n] = 0.54 - 0.46*cos(2πn/(M-1))
    /// Sidelobe attenuation: ~43 dB, endpoints at 0.08
    Hamming,

    /// Blackman window: w[n] = 0.42 - 0.5*cos(2πn/(M-1)) + 0.08*cos(4πn/(M-1))
    /// Sidelobe attenuation: ~58 dB, wider mainlobe
    Blackman,

    /// Rectangular window (no windowing)
    Rectangular,
}

impl WindowType {
    /// Coefficient value at index `n` of an `length`-point window
    fn coefficient(&self, n: usize, length: usize) -> f64 {
        if length == 1 {
            return 1.0;
        }
        let angle = 2.0 * PI * n as f64 / (length - 1) as f64;
        match self {
            WindowType::Hann => 0.5 - 0.5 * angle.cos(),
            WindowType::Hamming => 0.54 - 0.46 * angle.cos(),
            WindowType::Blackman => 0.42 - 0.5 * angle.cos() + 0.08 * (2.0 * angle).cos(),
            WindowType::Rectangular => 1.0,
        }
    }
}

/// Generate window coefficients
///
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (M)
///
/// # Returns
/// Vector of window coefficients w[n] for n = 0..M-1.
/// A one-point window is `[1.0]` for every type.
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f64> {
    (0..length)
        .map(|n| window_type.coefficient(n, length))
        .collect()
}

/// Sum of squared window coefficients (Σw²), the PSD normalization term
pub fn window_energy(window: &[f64]) -> f64 {
    window.iter().map(|&w| w * w).sum()
}
