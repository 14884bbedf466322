//! Artifact store port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::training::CompiledArtifacts;

/// Errors writing compiled artifacts.
#[derive(Debug, Clone, Error)]
pub enum ArtifactStoreError {
    #[error("Artifact serialization failed: {0}")]
    SerializationFailed(String),

    #[error("Artifact write failed: {0}")]
    IoError(String),
}

/// Write port for compiled training artifacts.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Writes the three artifacts in the fixed order examples, domain,
    /// stories, so a training run never observes a newer domain against
    /// older stories. Crash recovery between writes is delegated to the
    /// filesystem.
    ///
    /// # Errors
    ///
    /// - `SerializationFailed` if an artifact cannot be serialized
    /// - `IoError` on write failure
    async fn write(&self, artifacts: &CompiledArtifacts) -> Result<(), ArtifactStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn ArtifactStore) {}
    }
}
