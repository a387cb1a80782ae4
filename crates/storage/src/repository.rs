//! Repository Implementation

use crate::StorageError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Mutex;
use tracing::{debug, info};

/// Identifier assigned to a stored signal
pub type SignalId = u64;

/// Class label of a recorded signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// Condition present ('S')
    Present,
    /// Condition absent ('N')
    Absent,
}

impl Label {
    /// Class index used by classifiers
    pub fn class(&self) -> u8 {
        match self {
            Label::Present => 1,
            Label::Absent => 0,
        }
    }

    /// Single-letter code
    pub fn as_char(&self) -> char {
        match self {
            Label::Present => 'S',
            Label::Absent => 'N',
        }
    }
}

/// Signal metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalRecord {
    pub id: SignalId,
    pub name: String,
    pub label: Label,
}

/// Anything that can hand back the ordered samples of a signal
pub trait SampleSource {
    /// Fetch samples in recording order
    fn fetch_samples(&self, signal_id: SignalId) -> Result<Vec<f64>, StorageError>;
}

struct StoredSignal {
    record: SignalRecord,
    samples: Vec<f64>,
}

/// In-memory signal repository
pub struct SignalRepository {
    /// Signals keyed by id; ids increase with insertion order
    signals: Mutex<BTreeMap<SignalId, StoredSignal>>,
    /// Next signal ID
    next_id: Mutex<SignalId>,
}

impl SignalRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        info!("Creating in-memory signal repository");
        Self {
            signals: Mutex::new(BTreeMap::new()),
            next_id: Mutex::new(1),
        }
    }

    /// Store a signal and return its assigned ID
    pub fn insert_signal(
        &self,
        name: &str,
        label: Label,
        samples: Vec<f64>,
    ) -> Result<SignalId, StorageError> {
        let mut signals = self.signals.lock().map_err(lock_error)?;
        let mut next_id = self.next_id.lock().map_err(lock_error)?;

        let id = *next_id;
        *next_id += 1;

        debug!(id, name, samples = samples.len(), "Inserted signal");
        signals.insert(
            id,
            StoredSignal {
                record: SignalRecord {
                    id,
                    name: name.to_string(),
                    label,
                },
                samples,
            },
        );

        Ok(id)
    }

    /// Get signal metadata
    pub fn get(&self, id: SignalId) -> Result<SignalRecord, StorageError> {
        let signals = self.signals.lock().map_err(lock_error)?;
        signals
            .get(&id)
            .map(|s| s.record.clone())
            .ok_or(StorageError::NotFound(id))
    }

    /// List signals in insertion order with an optional label filter
    pub fn list(&self, label: Option<Label>, limit: usize) -> Result<Vec<SignalRecord>, StorageError> {
        let signals = self.signals.lock().map_err(lock_error)?;

        Ok(signals
            .values()
            .filter(|s| label.map_or(true, |l| s.record.label == l))
            .take(limit)
            .map(|s| s.record.clone())
            .collect())
    }

    /// Remove a signal, returning whether it existed
    pub fn remove(&self, id: SignalId) -> Result<bool, StorageError> {
        let mut signals = self.signals.lock().map_err(lock_error)?;
        Ok(signals.remove(&id).is_some())
    }

    /// Get total signal count
    pub fn signal_count(&self) -> usize {
        self.signals.lock().map(|s| s.len()).unwrap_or(0)
    }

    /// Clear all data
    pub fn clear(&self) {
        if let Ok(mut signals) = self.signals.lock() {
            signals.clear();
        }
    }
}

impl SampleSource for SignalRepository {
    fn fetch_samples(&self, signal_id: SignalId) -> Result<Vec<f64>, StorageError> {
        let signals = self.signals.lock().map_err(lock_error)?;
        signals
            .get(&signal_id)
            .map(|s| s.samples.clone())
            .ok_or(StorageError::NotFound(signal_id))
    }
}

impl Default for SignalRepository {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn lock_error<E: std::fmt::Display>(e: E) -> StorageError {
    StorageError::LockPoisoned(e.to_string())
}
