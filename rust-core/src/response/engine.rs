//! FIR frequency response: H(e^jω) = Σ h[n]·e^{-jωn} on the upper half of
//! the unit circle
//!
//! Real taps give a conjugate-symmetric response, so [0, π) carries all of
//! the information.

use super::grid::{FrequencyGrid, FrequencyScale};
use crate::db::magnitude_to_db;
use crate::error::{AnalysisError, Result};
use crate::filters::coefficients::validate_taps;
use num_complex::Complex64;
use rustfft::FftPlanner;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Filters longer than this use the FFT path under `ResponseMethod::Auto`
const FFT_TAP_THRESHOLD: usize = 64;

/// How the transfer function is evaluated over the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMethod {
    /// Direct below `FFT_TAP_THRESHOLD` taps, FFT above
    #[default]
    Auto,

    /// One finite sum per frequency point: O(N*M)
    Direct,

    /// Taps folded modulo 2M, one complex FFT of length 2M: O(M log M)
    Fft,
}

impl FromStr for ResponseMethod {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ResponseMethod::Auto),
            "direct" => Ok(ResponseMethod::Direct),
            "fft" => Ok(ResponseMethod::Fft),
            other => Err(AnalysisError::invalid(format!(
                "unknown response method '{}' (expected auto, direct or fft)",
                other
            ))),
        }
    }
}

/// Frequency response engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseConfig {
    /// Number of grid points M over [0, π)
    pub num_points: usize,

    /// Unit of the returned frequency axis
    pub scale: FrequencyScale,

    /// Evaluation strategy
    pub method: ResponseMethod,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            num_points: 512,
            scale: FrequencyScale::Radians,
            method: ResponseMethod::Auto,
        }
    }
}

/// Transfer function sampled on a grid
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyResponse {
    grid: FrequencyGrid,
    response: Vec<Complex64>,
    magnitude_db: Vec<f64>,
}

impl FrequencyResponse {
    pub fn grid(&self) -> &FrequencyGrid {
        &self.grid
    }

    /// Complex H[k], one per grid point
    pub fn response(&self) -> &[Complex64] {
        &self.response
    }

    /// 20*log10(|H[k]| + ε)
    pub fn magnitude_db(&self) -> &[f64] {
        &self.magnitude_db
    }

    /// Linear |H[k]|
    pub fn magnitude(&self) -> Vec<f64> {
        self.response.iter().map(|h| h.norm()).collect()
    }

    /// Wrapped phase atan2(Im H, Re H) in radians
    pub fn phase(&self) -> Vec<f64> {
        self.response.iter().map(|h| h.im.atan2(h.re)).collect()
    }

    pub fn len(&self) -> usize {
        self.response.len()
    }

    pub fn is_empty(&self) -> bool {
        self.response.is_empty()
    }

    /// Split into the (grid, dB) pair a plotting layer consumes
    pub fn into_parts(self) -> (FrequencyGrid, Vec<f64>) {
        (self.grid, self.magnitude_db)
    }
}

/// Stateless frequency response evaluator
#[derive(Debug, Clone, Default)]
pub struct FrequencyResponseEngine {
    config: ResponseConfig,
}

impl FrequencyResponseEngine {
    pub fn new(config: ResponseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResponseConfig {
        &self.config
    }

    /// Evaluate the response of `coefficients` over the configured grid
    ///
    /// # Errors
    /// `InvalidInput` for empty or non-finite taps, zero grid points, or a
    /// non-positive sample rate.
    pub fn analyze(&self, coefficients: &[f64]) -> Result<FrequencyResponse> {
        validate_taps(coefficients)?;
        let grid = FrequencyGrid::uniform(self.config.num_points, self.config.scale)?;

        let use_fft = match self.config.method {
            ResponseMethod::Direct => false,
            ResponseMethod::Fft => true,
            ResponseMethod::Auto => coefficients.len() > FFT_TAP_THRESHOLD,
        };

        log::debug!(
            "frequency response: {} taps, {} points, {}",
            coefficients.len(),
            grid.len(),
            if use_fft { "fft" } else { "direct" }
        );

        let response = if use_fft {
            fft_response(coefficients, grid.len())
        } else {
            evaluate_transfer_function(coefficients, grid.radians())
        };

        let magnitude_db = response.iter().map(|h| magnitude_to_db(h.norm())).collect();

        Ok(FrequencyResponse {
            grid,
            response,
            magnitude_db,
        })
    }
}

/// Frequency grid and magnitude in dB for `num_points` points over [0, π)
///
/// With `sample_rate` the grid is in Hz, otherwise in rad/sample.
pub fn compute_response(
    coefficients: &[f64],
    num_points: usize,
    sample_rate: Option<f64>,
) -> Result<(FrequencyGrid, Vec<f64>)> {
    let engine = FrequencyResponseEngine::new(ResponseConfig {
        num_points,
        scale: FrequencyScale::from_sample_rate(sample_rate),
        method: ResponseMethod::Auto,
    });
    Ok(engine.analyze(coefficients)?.into_parts())
}

/// Evaluate H(e^jω) at arbitrary frequencies
///
/// # Arguments
/// * `h` - Filter coefficients
/// * `omegas` - Frequencies in rad/sample
///
/// # Returns
/// Complex frequency response, one value per frequency
pub fn evaluate_transfer_function(h: &[f64], omegas: &[f64]) -> Vec<Complex64> {
    omegas
        .iter()
        .map(|&omega| {
            let mut sum = Complex64::new(0.0, 0.0);
            for (n, &h_n) in h.iter().enumerate() {
                let phase = -(omega * n as f64);
                sum += h_n * Complex64::new(phase.cos(), phase.sin());
            }
            sum
        })
        .collect()
}

/// Response at ω_k = πk/M via a single FFT of length 2M
///
/// e^{-jω_k n} has period 2M in n, so taps beyond 2M fold onto n mod 2M
/// without changing the result.
fn fft_response(h: &[f64], num_points: usize) -> Vec<Complex64> {
    let fft_size = 2 * num_points;

    let mut buffer = vec![Complex64::new(0.0, 0.0); fft_size];
    for (n, &h_n) in h.iter().enumerate() {
        buffer[n % fft_size].re += h_n;
    }

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(fft_size);
    fft.process(&mut buffer);

    buffer.truncate(num_points);
    buffer
}
