//! In-memory artifact store.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::training::CompiledArtifacts;
use crate::ports::{ArtifactStore, ArtifactStoreError};

/// In-memory artifact store capturing every written snapshot.
pub struct InMemoryArtifactStore {
    written: Mutex<Vec<CompiledArtifacts>>,
}

impl InMemoryArtifactStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            written: Mutex::new(Vec::new()),
        }
    }

    // === Test Helpers ===

    /// Number of completed writes.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn write_count(&self) -> usize {
        self.written
            .lock()
            .expect("InMemoryArtifactStore: lock poisoned")
            .len()
    }

    /// The most recently written artifacts, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn last_written(&self) -> Option<CompiledArtifacts> {
        self.written
            .lock()
            .expect("InMemoryArtifactStore: lock poisoned")
            .last()
            .cloned()
    }
}

impl Default for InMemoryArtifactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArtifactStore for InMemoryArtifactStore {
    async fn write(&self, artifacts: &CompiledArtifacts) -> Result<(), ArtifactStoreError> {
        self.written
            .lock()
            .expect("InMemoryArtifactStore: lock poisoned")
            .push(artifacts.clone());
        Ok(())
    }
}
