//! Python bindings for spectrogram analysis

use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray1};
use pyo3::prelude::*;

use super::filter_bindings::PyWindowType;
use crate::spectrum::{SpectrogramConfig, SpectrogramEngine, SpectrogramScaling};
use crate::waveform::Waveform;

/// Spectrogram engine exposed to Python
#[pyclass(name = "SpectrogramEngine")]
pub struct PySpectrogramEngine {
    engine: SpectrogramEngine,
}

#[pymethods]
impl PySpectrogramEngine {
    /// Create a new spectrogram engine
    ///
    /// Args:
    ///     frame_size: Samples per frame (NFFT)
    ///     overlap: Samples shared by consecutive frames (noverlap)
    ///     window_type: Window applied to each frame
    ///     transform_length: Zero-padded FFT length (default: frame_size)
    ///     scaling: "magnitude" or "psd"
    #[new]
    #[pyo3(signature = (frame_size=256, overlap=128, window_type=PyWindowType::Hann, transform_length=None, scaling="magnitude"))]
    fn new(
        frame_size: usize,
        overlap: usize,
        window_type: PyWindowType,
        transform_length: Option<usize>,
        scaling: &str,
    ) -> PyResult<Self> {
        let config = SpectrogramConfig {
            window_type: window_type.into(),
            transform_length,
            scaling: scaling.parse::<SpectrogramScaling>()?,
            ..SpectrogramConfig::with_overlap(frame_size, overlap)?
        };
        config.validate()?;

        Ok(Self {
            engine: SpectrogramEngine::new(config),
        })
    }

    /// Compute the spectrogram of a mono signal
    ///
    /// Args:
    ///     samples: Mono samples as numpy array
    ///     sample_rate: Sample rate in Hz
    ///
    /// Returns:
    ///     (times, frequencies, values) where values has shape (frames, bins)
    fn analyze<'py>(
        &self,
        py: Python<'py>,
        samples: PyReadonlyArray1<f64>,
        sample_rate: u32,
    ) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>, &'py PyArray2<f64>)> {
        let waveform = Waveform::mono(sample_rate, samples.as_slice()?.to_vec())?;
        let grid = self.engine.analyze(&waveform)?;

        let times = PyArray1::from_slice(py, grid.times());
        let frequencies = PyArray1::from_slice(py, grid.frequencies());
        let values = grid.into_values().into_pyarray(py);

        Ok((times, frequencies, values))
    }

    /// Get current frame size
    fn get_frame_size(&self) -> usize {
        self.engine.config().frame_size
    }

    /// Get current hop size
    fn get_hop_size(&self) -> usize {
        self.engine.config().hop_size
    }
}
