//! Shared signal generators for integration tests

#![allow(dead_code)]

use std::f64::consts::PI;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Unit-amplitude sine sampled at `sample_rate`
pub fn sine(freq_hz: f64, sample_rate: u32, len: usize) -> Vec<f64> {
    (0..len)
        .map(|n| (2.0 * PI * freq_hz * n as f64 / sample_rate as f64).sin())
        .collect()
}

/// Hamming-windowed sinc lowpass with cutoff `cutoff` (×π rad/sample) and gain
pub fn windowed_sinc_lowpass(length: usize, cutoff: f64, gain: f64) -> Vec<f64> {
    let center = (length - 1) as f64 / 2.0;
    (0..length)
        .map(|n| {
            let x = n as f64 - center;
            let ideal = if x.abs() < 1e-12 {
                cutoff
            } else {
                (cutoff * PI * x).sin() / (PI * x)
            };
            let w = 0.54 - 0.46 * (2.0 * PI * n as f64 / (length - 1) as f64).cos();
            ideal * w * gain
        })
        .collect()
}

/// Index of the largest value
pub fn argmax<'a>(values: impl IntoIterator<Item = &'a f64>) -> usize {
    values
        .into_iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
        .map(|(i, _)| i)
        .unwrap()
}
