//! Error types shared by the analysis engines

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Malformed input shape: empty taps, bad frame/hop sizes, wrong channel count
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse coefficient {token:?} on line {line}")]
    Parse { line: usize, token: String },
}

impl AnalysisError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        AnalysisError::InvalidInput(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
