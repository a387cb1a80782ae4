//! Per-Signal Result Cache

use crate::repository::{lock_error, SampleSource, SignalId};
use crate::StorageError;
use feature_engine::{run_pipeline, FeatureVector};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tracing::{debug, info};

/// Default number of cached signals
pub const DEFAULT_CACHE_CAPACITY: usize = 10_000;

/// Features cached together with the word width they were computed for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedFeatures {
    pub word_width: usize,
    pub features: FeatureVector,
}

/// Feature cache keyed by signal id
pub type FeatureCache = SignalCache<CachedFeatures>;

struct CacheInner<V> {
    entries: HashMap<SignalId, V>,
    /// Insertion order, oldest first
    order: VecDeque<SignalId>,
}

/// Bounded cache of per-signal results with explicit invalidation.
///
/// When full, the oldest insertion is evicted first.
pub struct SignalCache<V> {
    inner: Mutex<CacheInner<V>>,
    capacity: usize,
}

impl<V: Clone> SignalCache<V> {
    /// Create a cache holding at most `capacity` signals
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(CacheInner {
                entries: HashMap::new(),
                order: VecDeque::new(),
            }),
            capacity: capacity.max(1),
        }
    }

    /// Cached value for a signal
    pub fn get(&self, id: SignalId) -> Result<Option<V>, StorageError> {
        let inner = self.inner.lock().map_err(lock_error)?;
        Ok(inner.entries.get(&id).cloned())
    }

    /// Store a value, replacing any previous one for the same signal
    pub fn insert(&self, id: SignalId, value: V) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().map_err(lock_error)?;

        if inner.entries.remove(&id).is_some() {
            inner.order.retain(|&existing| existing != id);
        }

        // Enforce retention
        while inner.entries.len() >= self.capacity {
            match inner.order.pop_front() {
                Some(oldest) => {
                    inner.entries.remove(&oldest);
                    debug!(signal_id = oldest, "Evicted cache entry");
                }
                None => break,
            }
        }

        inner.entries.insert(id, value);
        inner.order.push_back(id);
        Ok(())
    }

    /// Drop the cached value for a signal, returning whether one existed
    pub fn invalidate(&self, id: SignalId) -> Result<bool, StorageError> {
        let mut inner = self.inner.lock().map_err(lock_error)?;
        let existed = inner.entries.remove(&id).is_some();
        if existed {
            inner.order.retain(|&existing| existing != id);
        }
        Ok(existed)
    }

    /// Drop every cached value
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.entries.clear();
            inner.order.clear();
        }
    }

    /// Number of cached signals
    pub fn len(&self) -> usize {
        self.inner.lock().map(|i| i.entries.len()).unwrap_or(0)
    }

    /// Check if the cache holds nothing
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: Clone + Serialize + DeserializeOwned> SignalCache<V> {
    /// Serialize all entries, oldest first
    pub fn to_bytes(&self) -> Result<Vec<u8>, StorageError> {
        let inner = self.inner.lock().map_err(lock_error)?;
        let snapshot: Vec<(SignalId, &V)> = inner
            .order
            .iter()
            .filter_map(|id| inner.entries.get(id).map(|v| (*id, v)))
            .collect();

        postcard::to_allocvec(&snapshot).map_err(|e| StorageError::SerializationError(e.to_string()))
    }

    /// Restore a cache from [`SignalCache::to_bytes`] output
    pub fn from_bytes(bytes: &[u8], capacity: usize) -> Result<Self, StorageError> {
        let snapshot: Vec<(SignalId, V)> =
            postcard::from_bytes(bytes).map_err(|e| StorageError::SerializationError(e.to_string()))?;

        let cache = Self::new(capacity);
        for (id, value) in snapshot {
            cache.insert(id, value)?;
        }
        info!(entries = cache.len(), "Restored cache snapshot");
        Ok(cache)
    }
}

impl SignalCache<CachedFeatures> {
    /// Cached features for `id` at `word_width`, computing and storing them
    /// on a miss.
    ///
    /// An entry computed at a different width counts as a miss. Pipeline
    /// failures are returned and leave the cache untouched.
    pub fn get_or_compute<S: SampleSource + ?Sized>(
        &self,
        id: SignalId,
        word_width: usize,
        source: &S,
    ) -> Result<FeatureVector, StorageError> {
        if let Some(cached) = self.get(id)? {
            if cached.word_width == word_width {
                return Ok(cached.features);
            }
        }

        let samples = source.fetch_samples(id)?;
        let result = run_pipeline(&samples, word_width)?;

        self.insert(
            id,
            CachedFeatures {
                word_width,
                features: result.features.clone(),
            },
        )?;
        Ok(result.features)
    }
}

impl<V: Clone> Default for SignalCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
