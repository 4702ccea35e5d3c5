//! Bounded submission history.
//!
//! Stored as one JSON array under a fixed key. Every append rewrites the
//! whole array, trimmed to the newest `capacity` records.

use crate::config::PortfolioConfig;
use crate::contact::SubmissionRecord;
use crate::error::PortfolioResult;

use super::KeyValueStore;

/// Result of a successful [`SubmissionHistory::append`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendOutcome {
    /// Records stored after the write
    pub len: usize,
    /// Oldest records dropped to stay within capacity
    pub evicted: usize,
}

/// Capacity-bounded, oldest-first-evicted list of submission records.
#[derive(Debug, Clone)]
pub struct SubmissionHistory<S> {
    store: S,
    key: String,
    capacity: usize,
}

impl<S: KeyValueStore> SubmissionHistory<S> {
    pub fn new(store: S, key: impl Into<String>, capacity: usize) -> Self {
        Self {
            store,
            key: key.into(),
            capacity: capacity.max(1),
        }
    }

    pub fn from_config(store: S, config: &PortfolioConfig) -> Self {
        Self::new(store, config.submissions_key.clone(), config.history_capacity)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Load all stored records, oldest first.
    ///
    /// Unparseable data is treated as an empty history and will be
    /// overwritten by the next append.
    pub fn load(&self) -> PortfolioResult<Vec<SubmissionRecord>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<SubmissionRecord>>(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Discarding unreadable submission history");
                Ok(Vec::new())
            }
        }
    }

    /// Append a record, evicting the oldest entries beyond capacity.
    pub fn append(&self, record: SubmissionRecord) -> PortfolioResult<AppendOutcome> {
        let mut records = self.load()?;
        records.push(record);

        let evicted = records.len().saturating_sub(self.capacity);
        if evicted > 0 {
            records.drain(..evicted);
        }

        let serialized = serde_json::to_string(&records)?;
        self.store.set(&self.key, &serialized)?;

        tracing::debug!(len = records.len(), evicted, "Stored contact submission");
        Ok(AppendOutcome {
            len: records.len(),
            evicted,
        })
    }
}
