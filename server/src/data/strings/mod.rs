//! String store
//!
//! Owns the collection of analyzed strings and persists every mutation through
//! a [`Persistence`] backend. Readers get consistent snapshots taken under a
//! read lock; writers persist before releasing the write lock and roll the
//! in-memory change back when persistence fails.

mod error;
mod persistence;

pub use error::StoreError;
pub use persistence::{JsonFilePersistence, MemoryPersistence, Persistence};

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::strings::{AnalyzedString, FilterSet, select};

pub struct StringStore {
    strings: RwLock<Vec<AnalyzedString>>,
    persistence: Arc<dyn Persistence>,
}

impl StringStore {
    /// Open the store, loading whatever the backend has persisted.
    ///
    /// An unreadable collection is logged and replaced by an empty one.
    pub async fn open(persistence: Arc<dyn Persistence>) -> Self {
        let strings = match persistence.load().await {
            Ok(strings) if strings.is_empty() => {
                tracing::debug!(
                    backend = persistence.backend_name(),
                    "No existing strings found, starting fresh"
                );
                if let Err(e) = persistence.save(&strings).await {
                    tracing::warn!(error = %e, "Failed to initialize string store");
                }
                strings
            }
            Ok(strings) => {
                tracing::debug!(
                    backend = persistence.backend_name(),
                    count = strings.len(),
                    "Loaded strings"
                );
                strings
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    backend = persistence.backend_name(),
                    "Failed to load strings, starting with an empty store"
                );
                Vec::new()
            }
        };

        Self {
            strings: RwLock::new(strings),
            persistence,
        }
    }

    /// In-memory store with no persistence
    pub fn in_memory() -> Self {
        Self {
            strings: RwLock::new(Vec::new()),
            persistence: Arc::new(MemoryPersistence),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.persistence.backend_name()
    }

    pub async fn count(&self) -> usize {
        self.strings.read().await.len()
    }

    pub async fn find_by_value(&self, value: &str) -> Option<AnalyzedString> {
        self.strings
            .read()
            .await
            .iter()
            .find(|s| s.value == value)
            .cloned()
    }

    /// Strings matching `filters`, in insertion order
    pub async fn filter(&self, filters: &FilterSet) -> Vec<AnalyzedString> {
        let strings = self.strings.read().await;
        select(filters, strings.iter()).into_iter().cloned().collect()
    }

    /// Add a new string. Fails when a string with the same id is stored.
    pub async fn insert(&self, record: AnalyzedString) -> Result<AnalyzedString, StoreError> {
        let mut strings = self.strings.write().await;
        if strings.iter().any(|s| s.id == record.id) {
            return Err(StoreError::AlreadyExists { id: record.id });
        }

        strings.push(record.clone());
        if let Err(e) = self.persistence.save(&strings).await {
            strings.pop();
            return Err(e);
        }

        tracing::debug!(id = %record.id, "String stored");
        Ok(record)
    }

    /// Remove the string with the given value, returning it if it was stored
    pub async fn remove_by_value(&self, value: &str) -> Result<Option<AnalyzedString>, StoreError> {
        let mut strings = self.strings.write().await;
        let Some(index) = strings.iter().position(|s| s.value == value) else {
            return Ok(None);
        };

        let removed = strings.remove(index);
        if let Err(e) = self.persistence.save(&strings).await {
            strings.insert(index, removed);
            return Err(e);
        }

        tracing::debug!(id = %removed.id, "String deleted");
        Ok(Some(removed))
    }

    /// Write the current collection through the persistence backend
    pub async fn flush(&self) -> Result<(), StoreError> {
        let strings = self.strings.read().await;
        self.persistence.save(&strings).await
    }
}
