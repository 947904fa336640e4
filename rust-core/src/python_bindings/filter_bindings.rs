//! Python bindings for taps, windows and resampling

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::filters::{FilterCoefficients, RationalResampler, WindowType};

/// Window type enum exposed to Python
#[pyclass(name = "WindowType")]
#[derive(Clone)]
pub enum PyWindowType {
    Hann,
    Hamming,
    Blackman,
    Rectangular,
}

impl From<PyWindowType> for WindowType {
    fn from(py_win: PyWindowType) -> Self {
        match py_win {
            PyWindowType::Hann => WindowType::Hann,
            PyWindowType::Hamming => WindowType::Hamming,
            PyWindowType::Blackman => WindowType::Blackman,
            PyWindowType::Rectangular => WindowType::Rectangular,
        }
    }
}

/// Parse whitespace/newline-delimited filter taps
///
/// Args:
///     text: Contents of a coefficient file
///
/// Returns:
///     Taps as numpy array
#[pyfunction]
pub fn parse_coefficients<'py>(py: Python<'py>, text: &str) -> PyResult<&'py PyArray1<f64>> {
    let coeffs = FilterCoefficients::from_text(text)?;
    Ok(PyArray1::from_vec(py, coeffs.into_inner()))
}

/// Rational resampler exposed to Python
#[pyclass(name = "RationalResampler")]
pub struct PyRationalResampler {
    resampler: RationalResampler,
}

#[pymethods]
impl PyRationalResampler {
    /// Create a resampler
    ///
    /// Args:
    ///     coefficients: Filter taps at the upsampled rate
    ///     up: Interpolation factor L
    ///     down: Decimation factor M
    #[new]
    fn new(coefficients: PyReadonlyArray1<f64>, up: usize, down: usize) -> PyResult<Self> {
        let coeffs = FilterCoefficients::new(coefficients.as_slice()?.to_vec())?;
        Ok(Self {
            resampler: RationalResampler::new(coeffs, up, down)?,
        })
    }

    /// Resample a single channel
    ///
    /// Args:
    ///     signal: Mono samples as numpy array
    ///
    /// Returns:
    ///     Resampled signal, floor(len * up / down) samples
    fn process<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let output = self.resampler.process(signal.as_slice()?);
        Ok(PyArray1::from_vec(py, output))
    }

    /// Number of output samples for a given input length
    fn output_len(&self, input_len: usize) -> usize {
        self.resampler.output_len(input_len)
    }
}
