//! Labelled Dataset Assembly

use crate::cache::FeatureCache;
use crate::repository::{Label, SignalId, SignalRepository};
use crate::StorageError;
use feature_engine::{FEATURE_DIMENSION, FEATURE_NAMES};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Feature matrix with one class label per row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub feature_names: Vec<String>,
    pub rows: Vec<[f64; FEATURE_DIMENSION]>,
    pub labels: Vec<u8>,
    pub signal_ids: Vec<SignalId>,
}

impl Dataset {
    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if no signal produced features
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row counts per class, indexed by class (`[absent, present]`)
    pub fn class_counts(&self) -> [usize; 2] {
        let mut counts = [0usize; 2];
        for &label in &self.labels {
            counts[usize::from(label.min(1))] += 1;
        }
        counts
    }
}

/// Build a balanced dataset: up to `per_label_limit` signals labelled
/// present, then up to `per_label_limit` labelled absent.
///
/// Features come through `cache`. Signals whose pipeline fails are skipped
/// with a warning.
pub fn build_dataset(
    repo: &SignalRepository,
    cache: &FeatureCache,
    word_width: usize,
    per_label_limit: usize,
) -> Result<Dataset, StorageError> {
    let mut dataset = Dataset {
        feature_names: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
        ..Default::default()
    };

    for label in [Label::Present, Label::Absent] {
        for record in repo.list(Some(label), per_label_limit)? {
            match cache.get_or_compute(record.id, word_width, repo) {
                Ok(features) => {
                    dataset.rows.push(features.to_array());
                    dataset.labels.push(label.class());
                    dataset.signal_ids.push(record.id);
                }
                Err(StorageError::Pipeline(e)) => {
                    warn!(signal_id = record.id, name = %record.name, error = %e, "Skipping signal");
                }
                Err(e) => return Err(e),
            }
        }
    }

    let [absent, present] = dataset.class_counts();
    info!(
        rows = dataset.len(),
        features = FEATURE_DIMENSION,
        absent,
        present,
        "Dataset created"
    );

    Ok(dataset)
}
