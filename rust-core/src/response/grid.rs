//! Frequency grids for transfer-function evaluation

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Unit of the frequency axis handed to the consumer
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "lowercase")]
pub enum FrequencyScale {
    /// Radians per sample, [0, π)
    #[default]
    Radians,

    /// Units of π rad/sample, [0, 1) where 1 = Nyquist
    Normalized,

    /// Hz for the given sample rate, [0, fs/2)
    Hz { sample_rate: f64 },
}

impl FrequencyScale {
    /// Radians when `sample_rate` is absent, Hz otherwise
    pub fn from_sample_rate(sample_rate: Option<f64>) -> Self {
        match sample_rate {
            Some(sample_rate) => FrequencyScale::Hz { sample_rate },
            None => FrequencyScale::Radians,
        }
    }

    /// Convert a radian frequency to this axis unit
    #[inline]
    pub fn radians_to_axis(&self, omega: f64) -> f64 {
        match self {
            FrequencyScale::Radians => omega,
            FrequencyScale::Normalized => omega / PI,
            FrequencyScale::Hz { sample_rate } => omega * sample_rate / (2.0 * PI),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if let FrequencyScale::Hz { sample_rate } = self {
            if !sample_rate.is_finite() || *sample_rate <= 0.0 {
                return Err(AnalysisError::invalid(format!(
                    "sample rate must be finite and positive, got {}",
                    sample_rate
                )));
            }
        }
        Ok(())
    }
}

/// Ordered frequency points, kept in radians and in the requested axis unit
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyGrid {
    radians: Vec<f64>,
    axis: Vec<f64>,
    scale: FrequencyScale,
}

impl FrequencyGrid {
    /// `num_points` equally spaced points ω_k = πk/M covering [0, π)
    pub fn uniform(num_points: usize, scale: FrequencyScale) -> Result<Self> {
        if num_points == 0 {
            return Err(AnalysisError::invalid("number of frequency points must be at least 1"));
        }
        scale.validate()?;

        let step = PI / num_points as f64;
        let radians: Vec<f64> = (0..num_points).map(|k| k as f64 * step).collect();
        let axis = radians.iter().map(|&w| scale.radians_to_axis(w)).collect();

        Ok(Self {
            radians,
            axis,
            scale,
        })
    }

    /// Points in rad/sample
    pub fn radians(&self) -> &[f64] {
        &self.radians
    }

    /// Points in the unit selected by `scale()`
    pub fn axis(&self) -> &[f64] {
        &self.axis
    }

    pub fn scale(&self) -> FrequencyScale {
        self.scale
    }

    pub fn len(&self) -> usize {
        self.radians.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radians.is_empty()
    }
}
