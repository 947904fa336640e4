//! PyO3 bindings for Python integration

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::AnalysisError;

mod filter_bindings;
mod response_bindings;
mod spectrogram_bindings;

impl From<AnalysisError> for PyErr {
    fn from(err: AnalysisError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Python module definition
#[pymodule]
fn firscope(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<response_bindings::PyResponseEngine>()?;
    m.add_class::<spectrogram_bindings::PySpectrogramEngine>()?;
    m.add_class::<filter_bindings::PyRationalResampler>()?;

    // Add WindowType enum
    m.add_class::<filter_bindings::PyWindowType>()?;

    m.add_function(wrap_pyfunction!(filter_bindings::parse_coefficients, m)?)?;

    Ok(())
}
