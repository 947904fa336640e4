//! Decoded audio samples plus their sample rate

use crate::error::{AnalysisError, Result};

/// Interleaved real-valued samples with a sample rate and channel count
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    sample_rate: u32,
    channels: u16,
    samples: Vec<f64>,
}

impl Waveform {
    /// Single-channel waveform
    pub fn mono(sample_rate: u32, samples: Vec<f64>) -> Result<Self> {
        Self::interleaved(sample_rate, 1, samples)
    }

    /// Interleaved multi-channel waveform (frame-major: L R L R ...)
    pub fn interleaved(sample_rate: u32, channels: u16, samples: Vec<f64>) -> Result<Self> {
        if sample_rate == 0 {
            return Err(AnalysisError::invalid("sample rate must be positive"));
        }
        if channels == 0 {
            return Err(AnalysisError::invalid("channel count must be at least 1"));
        }
        if samples.len() % channels as usize != 0 {
            return Err(AnalysisError::invalid(format!(
                "{} samples do not divide into {} channels",
                samples.len(),
                channels
            )));
        }

        Ok(Self {
            sample_rate,
            channels,
            samples,
        })
    }

    /// Extract one channel as a mono waveform
    pub fn channel(&self, index: u16) -> Result<Waveform> {
        if index >= self.channels {
            return Err(AnalysisError::invalid(format!(
                "channel {} requested from a {}-channel waveform",
                index, self.channels
            )));
        }

        let samples = self
            .samples
            .iter()
            .skip(index as usize)
            .step_by(self.channels as usize)
            .copied()
            .collect();

        Ok(Waveform {
            sample_rate: self.sample_rate,
            channels: 1,
            samples,
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn is_mono(&self) -> bool {
        self.channels == 1
    }

    /// Raw interleaved samples
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Samples per channel
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn duration_secs(&self) -> f64 {
        self.frames() as f64 / self.sample_rate as f64
    }
}
