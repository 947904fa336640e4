//! FIR frequency response evaluation

pub mod grid;
pub mod engine;

pub use grid::{FrequencyGrid, FrequencyScale};
pub use engine::{
    compute_response, evaluate_transfer_function, FrequencyResponse, FrequencyResponseEngine,
    ResponseConfig, ResponseMethod,
};
