//! Signal Error Types

use thiserror::Error;

/// Errors raised while validating a raw signal before encoding
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SignalError {
    /// Signal has no samples; mean and deviation are undefined
    #[error("Signal is empty")]
    EmptySignal,

    /// A sample is NaN or infinite
    #[error("Sample {index} is not a finite number: {value}")]
    InvalidInput { index: usize, value: f64 },

    /// Word width outside [1, max]
    #[error("Word width {width} is out of range [1, {max}]")]
    InvalidWordWidth { width: usize, max: usize },
}
