//! File-based artifact store.
//!
//! Writes the compiled artifacts into the bot template directory the
//! training process reads from: `data/nlu.json`, `domain.yml` and
//! `data/stories.md`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::training::CompiledArtifacts;
use crate::ports::{ArtifactStore, ArtifactStoreError};

/// File-based storage for compiled training artifacts.
#[derive(Debug, Clone)]
pub struct FileArtifactStore {
    template_dir: PathBuf,
}

impl FileArtifactStore {
    /// Creates a store rooted at the bot template directory.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileArtifactStore::new("./chatbot-template");
    /// ```
    pub fn new<P: AsRef<Path>>(template_dir: P) -> Self {
        Self {
            template_dir: template_dir.as_ref().to_path_buf(),
        }
    }

    fn data_dir(&self) -> PathBuf {
        self.template_dir.join("data")
    }

    fn nlu_path(&self) -> PathBuf {
        self.data_dir().join("nlu.json")
    }

    fn domain_path(&self) -> PathBuf {
        self.template_dir.join("domain.yml")
    }

    fn stories_path(&self) -> PathBuf {
        self.data_dir().join("stories.md")
    }

    async fn write_file(&self, path: &Path, content: &str) -> Result<(), ArtifactStoreError> {
        fs::write(path, content)
            .await
            .map_err(|e| ArtifactStoreError::IoError(e.to_string()))
    }
}

#[async_trait]
impl ArtifactStore for FileArtifactStore {
    async fn write(&self, artifacts: &CompiledArtifacts) -> Result<(), ArtifactStoreError> {
        fs::create_dir_all(self.data_dir())
            .await
            .map_err(|e| ArtifactStoreError::IoError(e.to_string()))?;

        let nlu = artifacts
            .nlu_json()
            .map_err(|e| ArtifactStoreError::SerializationFailed(e.to_string()))?;
        let domain = artifacts
            .domain_yaml()
            .map_err(|e| ArtifactStoreError::SerializationFailed(e.to_string()))?;

        // Fixed order: examples, domain, stories.
        self.write_file(&self.nlu_path(), &nlu).await?;
        self.write_file(&self.domain_path(), &domain).await?;
        self.write_file(&self.stories_path(), &artifacts.stories)
            .await?;

        Ok(())
    }
}
