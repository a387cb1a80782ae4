//! Sample and Parameter Validation

use crate::error::SignalError;

/// Widest word that still fits a `u64` word code
pub const MAX_WORD_WIDTH: usize = 64;

/// Validation configuration
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Upper bound for the sliding word width `m`
    pub max_word_width: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_word_width: MAX_WORD_WIDTH,
        }
    }
}

/// Validator for raw signals and encoder parameters
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        let max_word_width = config.max_word_width.clamp(1, MAX_WORD_WIDTH);
        Self {
            config: ValidationConfig { max_word_width },
        }
    }

    /// Reject empty signals and any non-finite sample.
    ///
    /// Reports the first offending index.
    pub fn validate_samples(&self, samples: &[f64]) -> Result<(), SignalError> {
        if samples.is_empty() {
            return Err(SignalError::EmptySignal);
        }

        match samples.iter().position(|v| !v.is_finite()) {
            Some(index) => Err(SignalError::InvalidInput {
                index,
                value: samples[index],
            }),
            None => Ok(()),
        }
    }

    /// Validate the word width used by the encoder
    pub fn validate_word_width(&self, width: usize) -> Result<(), SignalError> {
        if width == 0 || width > self.config.max_word_width {
            Err(SignalError::InvalidWordWidth {
                width,
                max: self.config.max_word_width,
            })
        } else {
            Ok(())
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
