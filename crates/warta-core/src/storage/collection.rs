//! Typed collection adapter over a [`KeyValueStore`]
//!
//! Reads never fail: a missing key, a backend read error or a payload that no
//! longer decodes all come back as `None`, which callers treat as "nothing
//! stored yet". Writes replace the whole collection and do report errors.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use super::KeyValueStore;
use crate::error::{Result, ResultExt, WartaError};

/// Serializes whole collections to JSON under a single key
#[derive(Clone)]
pub struct CollectionStore {
    backend: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for CollectionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionStore").finish_non_exhaustive()
    }
}

impl CollectionStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Underlying key-value backend
    pub fn backend(&self) -> &Arc<dyn KeyValueStore> {
        &self.backend
    }

    /// Collection stored under `key`, `None` when absent or unreadable
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<Vec<T>> {
        match self.try_read(key) {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!("Treating '{}' as empty: {}", key, err);
                None
            }
        }
    }

    /// Like [`read`](Self::read) but surfaces backend and decode failures
    pub fn try_read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };
        decode(key, &raw).map(Some)
    }

    /// Replace the collection stored under `key`
    pub fn write<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let raw = encode(items)?;
        self.backend
            .set(key, &raw)
            .with_context(|| format!("Persisting collection '{key}'"))
    }

    /// Raw string value, for single scalar entries
    pub fn read_raw(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("Treating '{}' as absent: {}", key, err);
                None
            }
        }
    }

    pub fn write_raw(&self, key: &str, value: &str) -> Result<()> {
        self.backend.set(key, value)
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        self.backend.remove(key)
    }
}

/// Serialize a collection to its stored textual form
pub fn encode<T: Serialize>(items: &[T]) -> Result<String> {
    Ok(serde_json::to_string(items)?)
}

/// Parse a stored collection, reporting corruption against `key`
pub fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Result<Vec<T>> {
    serde_json::from_str(raw).map_err(|e| WartaError::StorageCorrupt {
        key: key.to_string(),
        reason: e.to_string(),
    })
}
