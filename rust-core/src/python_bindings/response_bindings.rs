//! Python bindings for frequency response evaluation

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::response::{FrequencyResponseEngine, FrequencyScale, ResponseConfig, ResponseMethod};

/// Frequency response engine exposed to Python
#[pyclass(name = "ResponseEngine")]
pub struct PyResponseEngine {
    engine: FrequencyResponseEngine,
}

#[pymethods]
impl PyResponseEngine {
    /// Create a new response engine
    ///
    /// Args:
    ///     num_points: Grid points over [0, π)
    ///     sample_rate: If given, the frequency axis is in Hz
    ///     normalized: Without sample_rate, report ×π rad/sample instead of rad/sample
    ///     method: "auto", "direct" or "fft"
    #[new]
    #[pyo3(signature = (num_points=512, sample_rate=None, normalized=false, method="auto"))]
    fn new(
        num_points: usize,
        sample_rate: Option<f64>,
        normalized: bool,
        method: &str,
    ) -> PyResult<Self> {
        let scale = match (sample_rate, normalized) {
            (Some(sample_rate), _) => FrequencyScale::Hz { sample_rate },
            (None, true) => FrequencyScale::Normalized,
            (None, false) => FrequencyScale::Radians,
        };
        let config = ResponseConfig {
            num_points,
            scale,
            method: method.parse::<ResponseMethod>()?,
        };

        Ok(Self {
            engine: FrequencyResponseEngine::new(config),
        })
    }

    /// Evaluate the magnitude response
    ///
    /// Args:
    ///     coefficients: Filter taps as numpy array
    ///
    /// Returns:
    ///     (frequencies, magnitude_db) numpy arrays
    fn analyze<'py>(
        &self,
        py: Python<'py>,
        coefficients: PyReadonlyArray1<f64>,
    ) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
        let response = self.engine.analyze(coefficients.as_slice()?)?;
        let (grid, magnitude_db) = response.into_parts();

        Ok((
            PyArray1::from_slice(py, grid.axis()),
            PyArray1::from_vec(py, magnitude_db),
        ))
    }

    /// Evaluate the wrapped phase response in radians
    fn phase<'py>(
        &self,
        py: Python<'py>,
        coefficients: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let response = self.engine.analyze(coefficients.as_slice()?)?;
        Ok(PyArray1::from_vec(py, response.phase()))
    }

    /// Get number of grid points
    fn num_points(&self) -> usize {
        self.engine.config().num_points
    }
}
