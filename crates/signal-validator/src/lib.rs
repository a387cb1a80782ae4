//! Signal Validation
//!
//! Provides the error taxonomy and input checks for raw signal samples.

mod error;
mod validator;

pub use error::SignalError;
pub use validator::{ValidationConfig, Validator, MAX_WORD_WIDTH};
