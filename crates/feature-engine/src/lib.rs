//! Feature Engineering Engine
//!
//! Runs the symbolic dynamics pipeline over a raw signal and assembles the
//! fixed-schema feature vector consumed by classifiers.

mod features;
mod pipeline;
mod statistics;

pub use features::{extract_features, FeatureVector, FEATURE_DIMENSION, FEATURE_NAMES};
pub use pipeline::{run_pipeline, PipelineResult, DEFAULT_WORD_WIDTH};
pub use statistics::StatisticalFeatures;

pub use signal_validator::SignalError;
pub use symbolic_dynamics::{format_word, BinarySequence, FrequencyTable, WordCode};
