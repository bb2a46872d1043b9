//! Persistence backends for the string store
//!
//! The JSON backend keeps the whole collection in a single pretty-printed file
//! and replaces it atomically (write to a temporary sibling, then rename).

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::error::StoreError;
use crate::domain::AnalyzedString;

/// Trait for string store persistence backends
///
/// Implementations must be thread-safe (Send + Sync) for use in async contexts.
#[async_trait]
pub trait Persistence: Send + Sync {
    /// Load the persisted collection.
    ///
    /// Returns an empty collection when nothing has been persisted yet.
    async fn load(&self) -> Result<Vec<AnalyzedString>, StoreError>;

    /// Replace the persisted collection with `strings`
    async fn save(&self, strings: &[AnalyzedString]) -> Result<(), StoreError>;

    /// Short backend name for logging
    fn backend_name(&self) -> &'static str;
}

/// JSON file persistence
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn ensure_parent_dir(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Persistence for JsonFilePersistence {
    async fn load(&self) -> Result<Vec<AnalyzedString>, StoreError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, strings: &[AnalyzedString]) -> Result<(), StoreError> {
        self.ensure_parent_dir().await?;
        let json = serde_json::to_vec_pretty(strings)?;
        let temp = self.temp_path();
        fs::write(&temp, json).await?;
        fs::rename(&temp, &self.path).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "json"
    }
}

/// No-op persistence: the collection lives only in memory
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryPersistence;

#[async_trait]
impl Persistence for MemoryPersistence {
    async fn load(&self) -> Result<Vec<AnalyzedString>, StoreError> {
        Ok(Vec::new())
    }

    async fn save(&self, _strings: &[AnalyzedString]) -> Result<(), StoreError> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
