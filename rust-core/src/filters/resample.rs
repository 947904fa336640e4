//! Rational sample-rate conversion with given FIR taps
//!
//! Conceptually: insert `up - 1` zeros between input samples, convolve with
//! the taps, keep every `down`-th output. Only taps that land on non-zero
//! upsampled samples are evaluated (polyphase form).

use super::coefficients::FilterCoefficients;
use crate::error::{AnalysisError, Result};
use crate::waveform::Waveform;

/// Interpolate-by-`up`, filter, decimate-by-`down`
///
/// The taps run at the upsampled rate. A unity-passband filter needs a gain
/// of `up` to keep the input level.
#[derive(Debug, Clone)]
pub struct RationalResampler {
    coefficients: FilterCoefficients,
    up: usize,
    down: usize,
}

impl RationalResampler {
    /// # Arguments
    /// * `coefficients` - Anti-imaging/anti-aliasing taps at rate fs·up
    /// * `up` - Interpolation factor L ≥ 1
    /// * `down` - Decimation factor M ≥ 1
    pub fn new(coefficients: FilterCoefficients, up: usize, down: usize) -> Result<Self> {
        if up == 0 || down == 0 {
            return Err(AnalysisError::invalid(format!(
                "resampling factors must be positive, got {}/{}",
                up, down
            )));
        }

        log::info!(
            "resampler: {} taps, up {}, down {}",
            coefficients.len(),
            up,
            down
        );

        Ok(Self {
            coefficients,
            up,
            down,
        })
    }

    pub fn up(&self) -> usize {
        self.up
    }

    pub fn down(&self) -> usize {
        self.down
    }

    pub fn coefficients(&self) -> &FilterCoefficients {
        &self.coefficients
    }

    /// Output samples per channel: ⌊len·up/down⌋
    pub fn output_len(&self, input_len: usize) -> usize {
        input_len * self.up / self.down
    }

    /// Resample one channel
    ///
    /// y[m] = Σ_k h[k]·x_up[m·down − k], where x_up[j] = x[j/up] when up
    /// divides j and zero otherwise. Samples before 0 or past the end read
    /// as zero.
    pub fn process(&self, input: &[f64]) -> Vec<f64> {
        let taps = self.coefficients.as_slice();

        (0..self.output_len(input.len()))
            .map(|m| {
                let t = m * self.down;
                let mut sum = 0.0;

                // First tap whose upsampled index t - k is a multiple of `up`
                let mut k = t % self.up;
                while k < taps.len() && k <= t {
                    let idx = (t - k) / self.up;
                    if idx < input.len() {
                        sum += taps[k] * input[idx];
                    }
                    k += self.up;
                }

                sum
            })
            .collect()
    }

    /// Resample every channel of an interleaved waveform
    ///
    /// # Errors
    /// `InvalidInput` if sample_rate·up/down is not an integer.
    pub fn process_waveform(&self, waveform: &Waveform) -> Result<Waveform> {
        let scaled = waveform.sample_rate() as u64 * self.up as u64;
        if scaled % self.down as u64 != 0 {
            return Err(AnalysisError::invalid(format!(
                "{} Hz * {}/{} is not an integer sample rate",
                waveform.sample_rate(),
                self.up,
                self.down
            )));
        }
        let out_rate = u32::try_from(scaled / self.down as u64).map_err(|_| {
            AnalysisError::invalid(format!("output sample rate {} is out of range", scaled))
        })?;

        let channels = waveform.channels();
        let out_frames = self.output_len(waveform.frames());
        let mut interleaved = vec![0.0; out_frames * channels as usize];

        for ch in 0..channels {
            let resampled = self.process(waveform.channel(ch)?.samples());
            for (frame, value) in resampled.into_iter().enumerate() {
                interleaved[frame * channels as usize + ch as usize] = value;
            }
        }

        log::debug!(
            "resampled {} frames @ {} Hz -> {} frames @ {} Hz ({} ch)",
            waveform.frames(),
            waveform.sample_rate(),
            out_frames,
            out_rate,
            channels
        );

        Waveform::interleaved(out_rate, channels, interleaved)
    }
}
