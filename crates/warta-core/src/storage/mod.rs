//! Persistent Storage Layer
//!
//! A namespaced key-value store holding serialized collections. Two backends:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                  CollectionStore                    │
//! │        read::<T>(key) / write::<T>(key, items)      │
//! ├─────────────────────────────────────────────────────┤
//! │              dyn KeyValueStore                      │
//! │   MemoryStore (tests)    │   SqliteStore (WAL)      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutation is read-modify-write with no isolation between processes:
//! the last writer wins.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use warta_core::storage::{CollectionStore, MemoryStore};
//!
//! let store = CollectionStore::new(Arc::new(MemoryStore::new()));
//! store.write("warta.liked.u1", &["42".to_string()]).unwrap();
//! let liked: Vec<String> = store.read("warta.liked.u1").unwrap_or_default();
//! assert_eq!(liked, vec!["42".to_string()]);
//! ```

pub mod collection;
pub mod memory;
pub mod sqlite_store;

pub use collection::CollectionStore;
pub use memory::MemoryStore;
pub use sqlite_store::SqliteStore;

use crate::error::Result;

/// Minimal string key-value contract the collection adapter sits on.
///
/// Implementations use interior mutability so one store can be shared by the
/// repository and the engagement tracker through an `Arc`.
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, `None` if never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Key layout under a namespace prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreKeys {
    namespace: String,
}

impl StoreKeys {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Key holding the user-authored article collection
    pub fn articles(&self) -> String {
        format!("{}.articles", self.namespace)
    }

    /// Key holding one user's liked-article ids
    pub fn liked(&self, user_id: &str) -> String {
        format!("{}.liked.{}", self.namespace, user_id)
    }

    /// Key holding the device-local user identity
    pub fn device_user(&self) -> String {
        format!("{}.user_id", self.namespace)
    }
}

impl Default for StoreKeys {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_NAMESPACE)
    }
}
