//! Key-value persistence capability.
//!
//! The page keeps two pieces of state outside the process: the theme
//! preference and a bounded history of contact submissions. Both go
//! through [`KeyValueStore`], which is injected at construction so the
//! browser's local storage can be swapped for [`MemoryStore`] in tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{PortfolioError, PortfolioResult};

mod history;

pub use history::{AppendOutcome, SubmissionHistory};

/// String key-value store with synchronous, atomic single-key operations.
///
/// Methods take `&self`: the browser store is a global handle and the
/// in-memory store is internally shared, matching how local storage
/// behaves when several components hold it.
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if absent.
    fn get(&self, key: &str) -> PortfolioResult<Option<String>>;

    /// Replace the value under `key`.
    fn set(&self, key: &str, value: &str) -> PortfolioResult<()>;

    /// Delete `key`. Succeeds if the key does not exist.
    fn remove(&self, key: &str) -> PortfolioResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> PortfolioResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> PortfolioResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> PortfolioResult<()> {
        (**self).remove(key)
    }
}

/// In-memory store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<BTreeMap<String, String>>>,
    /// Maximum total bytes (keys + values), mimicking a browser quota
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects writes once `bytes` would be exceeded.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: Arc::default(),
            quota: Some(bytes),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn used_bytes_without(entries: &BTreeMap<String, String>, key: &str) -> usize {
        entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> PortfolioResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PortfolioResult<()> {
        let mut entries = self.entries.write();
        if let Some(quota) = self.quota {
            let needed = Self::used_bytes_without(&entries, key) + key.len() + value.len();
            if needed > quota {
                return Err(PortfolioError::Storage(format!(
                    "quota exceeded writing '{}' ({} > {} bytes)",
                    key, needed, quota
                )));
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> PortfolioResult<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}
