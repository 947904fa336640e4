//! Windowing of time-domain frames before the FFT

use crate::filters::windows::{generate_window, WindowType};

/// Apply window to signal
///
/// # Returns
/// Windowed copy of `signal`, window length = signal length
pub fn apply_window(signal: &[f64], window_type: WindowType) -> Vec<f64> {
    let window = generate_window(window_type, signal.len());
    let mut out = Vec::with_capacity(signal.len());
    apply_window_into(signal, &window, &mut out);
    out
}

/// Multiply `frame` by a precomputed `window` into `out`
///
/// `out` is cleared first so one buffer can be reused across frames.
/// The shorter of the two inputs sets the output length.
pub fn apply_window_into(frame: &[f64], window: &[f64], out: &mut Vec<f64>) {
    out.clear();
    out.extend(frame.iter().zip(window.iter()).map(|(&s, &w)| s * w));
}
