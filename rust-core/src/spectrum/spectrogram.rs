//! Short-time spectral analysis
//!
//! Slides a window of `frame_size` samples along a mono waveform in steps of
//! `hop_size`, transforms each windowed frame and stores its one-sided
//! spectrum in dB as one row of the output grid. A trailing partial frame is
//! dropped, never zero-padded.

use super::fft::FftEngine;
use super::windowing::apply_window_into;
use crate::db::{magnitude_to_db, power_to_db};
use crate::error::{AnalysisError, Result};
use crate::filters::windows::{generate_window, window_energy, WindowType};
use crate::waveform::Waveform;
use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Cell values stored in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpectrogramScaling {
    /// 20*log10(|X[k]| + ε)
    #[default]
    Magnitude,

    /// One-sided density |X[k]|²/(fs·Σw²), doubled off DC/Nyquist, as 10*log10(p + ε)
    PowerSpectralDensity,
}

impl FromStr for SpectrogramScaling {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "magnitude" => Ok(SpectrogramScaling::Magnitude),
            "psd" | "power_spectral_density" => Ok(SpectrogramScaling::PowerSpectralDensity),
            other => Err(AnalysisError::invalid(format!(
                "unknown spectrogram scaling '{}' (expected magnitude or psd)",
                other
            ))),
        }
    }
}

/// Spectrogram configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectrogramConfig {
    /// Samples per analysis frame (F ≥ 2)
    pub frame_size: usize,

    /// Stride between frame starts (0 < S ≤ F)
    pub hop_size: usize,

    /// Taper applied to each frame
    pub window_type: WindowType,

    /// FFT length; `None` uses `frame_size`, otherwise must be ≥ `frame_size`
    pub transform_length: Option<usize>,

    /// dB scaling of each cell
    pub scaling: SpectrogramScaling,
}

impl Default for SpectrogramConfig {
    fn default() -> Self {
        Self {
            frame_size: 256,
            hop_size: 128,
            window_type: WindowType::Hann,
            transform_length: None,
            scaling: SpectrogramScaling::Magnitude,
        }
    }
}

impl SpectrogramConfig {
    /// Build from frame size and overlap (hop = frame - overlap)
    pub fn with_overlap(frame_size: usize, overlap: usize) -> Result<Self> {
        if overlap >= frame_size {
            return Err(AnalysisError::invalid(format!(
                "overlap {} must be smaller than frame size {}",
                overlap, frame_size
            )));
        }
        let config = Self {
            frame_size,
            hop_size: frame_size - overlap,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Samples shared by consecutive frames
    pub fn overlap(&self) -> usize {
        self.frame_size.saturating_sub(self.hop_size)
    }

    /// Effective FFT length
    pub fn fft_size(&self) -> usize {
        self.transform_length.unwrap_or(self.frame_size)
    }

    pub fn validate(&self) -> Result<()> {
        if self.frame_size < 2 {
            return Err(AnalysisError::invalid(format!(
                "frame size must be at least 2, got {}",
                self.frame_size
            )));
        }
        if self.hop_size == 0 {
            return Err(AnalysisError::invalid("hop size must be positive"));
        }
        if self.hop_size > self.frame_size {
            return Err(AnalysisError::invalid(format!(
                "hop size {} exceeds frame size {}",
                self.hop_size, self.frame_size
            )));
        }
        if let Some(len) = self.transform_length {
            if len < self.frame_size {
                return Err(AnalysisError::invalid(format!(
                    "transform length {} is shorter than frame size {}",
                    len, self.frame_size
                )));
            }
        }
        Ok(())
    }
}

/// Number of whole frames: ⌊(L − F)/S⌋ + 1 when L ≥ F, else 0
pub fn frame_count(num_samples: usize, frame_size: usize, hop_size: usize) -> usize {
    if hop_size == 0 || num_samples < frame_size {
        return 0;
    }
    (num_samples - frame_size) / hop_size + 1
}

/// Time-frequency grid in dB, indexed by (frame, bin)
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrogramGrid {
    values: Array2<f64>,
    times: Vec<f64>,
    frequencies: Vec<f64>,
    frame_size: usize,
    hop_size: usize,
    sample_rate: u32,
}

impl SpectrogramGrid {
    /// dB values, shape (num_frames, num_bins)
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Spectrum of frame `index`, if it exists
    pub fn frame(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.num_frames()).then(|| self.values.row(index))
    }

    /// Frame start times in seconds: i·hop / fs
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Frame centre times in seconds: (i·hop + F/2) / fs
    pub fn center_times(&self) -> Vec<f64> {
        let offset = self.frame_size as f64 / 2.0 / self.sample_rate as f64;
        self.times.iter().map(|t| t + offset).collect()
    }

    /// Bin frequencies in Hz: k·fs / transform_length
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn num_frames(&self) -> usize {
        self.values.nrows()
    }

    pub fn num_bins(&self) -> usize {
        self.values.ncols()
    }

    pub fn hop_size(&self) -> usize {
        self.hop_size
    }

    pub fn into_values(self) -> Array2<f64> {
        self.values
    }
}

/// Stateless short-time spectral analyzer
#[derive(Debug, Clone, Default)]
pub struct SpectrogramEngine {
    config: SpectrogramConfig,
}

impl SpectrogramEngine {
    pub fn new(config: SpectrogramConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SpectrogramConfig {
        &self.config
    }

    /// Compute the spectrogram of a mono waveform
    ///
    /// # Errors
    /// `InvalidInput` for an invalid configuration or a multi-channel
    /// waveform. A waveform shorter than one frame gives zero frames.
    pub fn analyze(&self, waveform: &Waveform) -> Result<SpectrogramGrid> {
        self.config.validate()?;
        if !waveform.is_mono() {
            return Err(AnalysisError::invalid(format!(
                "spectrogram needs a mono waveform, got {} channels",
                waveform.channels()
            )));
        }

        let samples = waveform.samples();
        let sample_rate = waveform.sample_rate();
        let fs = sample_rate as f64;
        let frame_size = self.config.frame_size;
        let hop_size = self.config.hop_size;

        let mut fft = FftEngine::new(self.config.fft_size());
        let num_frames = frame_count(samples.len(), frame_size, hop_size);
        let num_bins = fft.num_bins();

        log::debug!(
            "spectrogram: {} samples @ {} Hz, frame {}, hop {}, nfft {} -> {} frames",
            samples.len(),
            sample_rate,
            frame_size,
            hop_size,
            fft.fft_size(),
            num_frames
        );
        if num_frames == 0 {
            log::warn!(
                "waveform has {} samples, fewer than one {}-sample frame",
                samples.len(),
                frame_size
            );
        }

        let window = generate_window(self.config.window_type, frame_size);
        let psd_scale = 1.0 / (fs * window_energy(&window));
        let fft_size = fft.fft_size();

        let mut values = Array2::<f64>::zeros((num_frames, num_bins));
        let mut windowed = Vec::with_capacity(frame_size);

        for (i, mut row) in values.outer_iter_mut().enumerate() {
            let start = i * hop_size;
            apply_window_into(&samples[start..start + frame_size], &window, &mut windowed);

            let spectrum = fft.compute_spectrum(&windowed)?;

            match self.config.scaling {
                SpectrogramScaling::Magnitude => {
                    for (cell, x) in row.iter_mut().zip(spectrum) {
                        *cell = magnitude_to_db(x.norm());
                    }
                }
                SpectrogramScaling::PowerSpectralDensity => {
                    for (k, (cell, x)) in row.iter_mut().zip(spectrum).enumerate() {
                        let mut p = x.norm_sqr() * psd_scale;
                        let is_nyquist = fft_size % 2 == 0 && k == fft_size / 2;
                        if k != 0 && !is_nyquist {
                            p *= 2.0;
                        }
                        *cell = power_to_db(p);
                    }
                }
            }
        }

        let times = (0..num_frames)
            .map(|i| (i * hop_size) as f64 / fs)
            .collect();

        Ok(SpectrogramGrid {
            values,
            times,
            frequencies: fft.frequency_axis_hz(fs),
            frame_size,
            hop_size,
            sample_rate,
        })
    }
}

/// Spectrogram with a Hann window and `frame_size`-point transforms
pub fn compute_spectrogram(
    waveform: &Waveform,
    frame_size: usize,
    hop_size: usize,
) -> Result<SpectrogramGrid> {
    SpectrogramEngine::new(SpectrogramConfig {
        frame_size,
        hop_size,
        ..Default::default()
    })
    .analyze(waveform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sine(freq: f64, sample_rate: u32, len: usize) -> Waveform {
        let samples = (0..len)
            .map(|n| (2.0 * PI * freq * n as f64 / sample_rate as f64).sin())
            .collect();
        Waveform::mono(sample_rate, samples).unwrap()
    }

    #[test]
    fn test_frame_count_law() {
        assert_eq!(frame_count(1000, 256, 128), 6);
        assert_eq!(frame_count(256, 256, 128), 1);
        assert_eq!(frame_count(255, 256, 128), 0);
        assert_eq!(frame_count(1024, 256, 256), 4);
    }

    #[test]
    fn test_grid_shape_and_axes() {
        let wav = sine(1000.0, 8000, 1000);
        let grid = compute_spectrogram(&wav, 256, 128).unwrap();

        assert_eq!(grid.num_frames(), 6);
        assert_eq!(grid.num_bins(), 129);
        assert_eq!(grid.values().dim(), (6, 129));

        assert!((grid.times()[1] - 128.0 / 8000.0).abs() < 1e-12);
        assert!((grid.center_times()[0] - 128.0 / 8000.0).abs() < 1e-12);
        assert!((grid.frequencies()[1] - 8000.0 / 256.0).abs() < 1e-12);
        assert!((grid.frequencies()[128] - 4000.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_trailing_frame_dropped() {
        // 300 samples: one full 256 frame, the second would need 384
        let wav = sine(500.0, 8000, 300);
        let grid = compute_spectrogram(&wav, 256, 128).unwrap();
        assert_eq!(grid.num_frames(), 1);
    }

    #[test]
    fn test_short_waveform_gives_zero_frames() {
        let wav = sine(500.0, 8000, 100);
        let grid = compute_spectrogram(&wav, 256, 128).unwrap();
        assert_eq!(grid.num_frames(), 0);
        assert_eq!(grid.num_bins(), 129);
        assert!(grid.times().is_empty());
        assert!(grid.frame(0).is_none());
    }

    #[test]
    fn test_zero_padding_sets_bin_spacing() {
        let wav = sine(1000.0, 8000, 2048);
        let config = SpectrogramConfig {
            frame_size: 200,
            hop_size: 100,
            transform_length: Some(256),
            ..Default::default()
        };
        let grid = SpectrogramEngine::new(config).analyze(&wav).unwrap();

        assert_eq!(grid.num_bins(), 129);
        assert!((grid.frequencies()[1] - 8000.0 / 256.0).abs() < 1e-12);
    }

    #[test]
    fn test_silence_is_finite() {
        let wav = Waveform::mono(8000, vec![0.0; 1024]).unwrap();
        for scaling in [SpectrogramScaling::Magnitude, SpectrogramScaling::PowerSpectralDensity] {
            let config = SpectrogramConfig {
                scaling,
                ..Default::default()
            };
            let grid = SpectrogramEngine::new(config).analyze(&wav).unwrap();
            assert!(grid.values().iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn test_psd_of_white_level() {
        // Rectangular window over a unit DC frame: |X0|² = F², Σw² = F, so p = F/fs
        let wav = Waveform::mono(1000, vec![1.0; 64]).unwrap();
        let config = SpectrogramConfig {
            frame_size: 64,
            hop_size: 64,
            window_type: WindowType::Rectangular,
            transform_length: None,
            scaling: SpectrogramScaling::PowerSpectralDensity,
        };
        let grid = SpectrogramEngine::new(config).analyze(&wav).unwrap();
        let expected = 10.0 * (64.0f64 / 1000.0 + 1e-10).log10();
        assert!((grid.values()[[0, 0]] - expected).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_invalid_configs() {
        let wav = sine(100.0, 8000, 1024);
        assert!(compute_spectrogram(&wav, 1, 1).is_err());
        assert!(compute_spectrogram(&wav, 256, 0).is_err());
        assert!(compute_spectrogram(&wav, 256, 257).is_err());

        let config = SpectrogramConfig {
            transform_length: Some(128),
            ..Default::default()
        };
        assert!(SpectrogramEngine::new(config).analyze(&wav).is_err());
    }

    #[test]
    fn test_rejects_stereo() {
        let wav = Waveform::interleaved(8000, 2, vec![0.0; 2048]).unwrap();
        let err = compute_spectrogram(&wav, 256, 128).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
    }

    #[test]
    fn test_with_overlap() {
        let config = SpectrogramConfig::with_overlap(1024, 512).unwrap();
        assert_eq!(config.hop_size, 512);
        assert_eq!(config.overlap(), 512);
        assert!(SpectrogramConfig::with_overlap(256, 256).is_err());
    }
}
