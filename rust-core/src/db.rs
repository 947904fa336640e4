//! Decibel conversion with a log(0) guard
//! 
//! The guard is additive, so an exact null maps to 20*log10(1e-10) = -200 dB
//! instead of -inf.

/// Additive guard applied before every logarithm
pub const DB_EPSILON: f64 = 1e-10;

/// Magnitude to dB: 20*log10(|x| + ε)
#[inline]
pub fn magnitude_to_db(magnitude: f64) -> f64 {
    20.0 * (magnitude.abs() + DB_EPSILON).log10()
}

/// Power to dB: 10*log10(p + ε)
#[inline]
pub fn power_to_db(power: f64) -> f64 {
    10.0 * (power.abs() + DB_EPSILON).log10()
}

/// Convert a magnitude slice to dB
pub fn magnitudes_to_db(magnitudes: &[f64]) -> Vec<f64> {
    magnitudes.iter().map(|&m| magnitude_to_db(m)).collect()
}
