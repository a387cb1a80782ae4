//! Storage Layer
//!
//! Provides the in-memory signal repository, an explicit feature cache keyed
//! by signal id, and labelled dataset assembly.

mod cache;
mod dataset;
mod repository;

pub use cache::{CachedFeatures, FeatureCache, SignalCache, DEFAULT_CACHE_CAPACITY};
pub use dataset::{build_dataset, Dataset};
pub use repository::{Label, SampleSource, SignalId, SignalRecord, SignalRepository};

use feature_engine::SignalError;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Lock error: {0}")]
    LockPoisoned(String),
    #[error("Signal {0} not found")]
    NotFound(SignalId),
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] SignalError),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
