//! TrainBotHandler - Compile, train, and ratchet intent statuses.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::foundation::DomainError;
use crate::domain::intent::IntentStatus;
use crate::domain::training::{compile, CompileError};
use crate::ports::{ArtifactStore, ArtifactStoreError, BotRuntime, IntentCatalog, TrainingLock};

/// Errors from the training orchestration.
#[derive(Debug, Error)]
pub enum TrainingError {
    /// Another training run holds the lock; the request is rejected, never
    /// run concurrently.
    #[error("A training run is already in progress")]
    AlreadyInProgress,

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Artifacts(#[from] ArtifactStoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Outcome of a training run that got past compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainingOutcome {
    /// Training and relaunch succeeded; statuses were ratcheted.
    Completed { deployed: u64, archived: u64 },
    /// The external process failed. Logged, statuses left untouched; the
    /// caller still gets a failure indication.
    RuntimeFailed,
}

/// Handler orchestrating one training run.
///
/// Acquires the training lock, compiles the full catalog, writes the
/// artifacts, invokes the external training process, and on success ratchets
/// intent statuses. The lock is released on every exit path.
pub struct TrainBotHandler {
    intent_catalog: Arc<dyn IntentCatalog>,
    artifact_store: Arc<dyn ArtifactStore>,
    bot_runtime: Arc<dyn BotRuntime>,
    training_lock: Arc<dyn TrainingLock>,
}

impl TrainBotHandler {
    pub fn new(
        intent_catalog: Arc<dyn IntentCatalog>,
        artifact_store: Arc<dyn ArtifactStore>,
        bot_runtime: Arc<dyn BotRuntime>,
        training_lock: Arc<dyn TrainingLock>,
    ) -> Self {
        Self {
            intent_catalog,
            artifact_store,
            bot_runtime,
            training_lock,
        }
    }

    pub async fn handle(&self) -> Result<TrainingOutcome, TrainingError> {
        if !self.training_lock.try_acquire().await? {
            return Err(TrainingError::AlreadyInProgress);
        }

        let outcome = self.run_locked().await;

        // Guaranteed cleanup: the lock is released whatever happened above.
        if let Err(err) = self.training_lock.release().await {
            error!(error = %err, "failed to release training lock");
        }

        outcome
    }

    async fn run_locked(&self) -> Result<TrainingOutcome, TrainingError> {
        // 1. Compile the full catalog and write the artifacts
        let intents = self.intent_catalog.find_full().await?;
        let artifacts = compile(&intents)?;
        self.artifact_store.write(&artifacts).await?;

        // 2. Train and relaunch the serving process
        if let Err(err) = self.train_and_restart().await {
            warn!(error = %err, "bot training failed; intent statuses left untouched");
            return Ok(TrainingOutcome::RuntimeFailed);
        }

        // 3. Ratchet statuses now that the new model serves
        let deployed = self
            .intent_catalog
            .transition_all(
                &[IntentStatus::ToDeploy, IntentStatus::Active],
                IntentStatus::Active,
            )
            .await?;
        let archived = self
            .intent_catalog
            .transition_all(&[IntentStatus::ToArchive], IntentStatus::Archived)
            .await?;

        info!(deployed, archived, "training run complete");
        Ok(TrainingOutcome::Completed { deployed, archived })
    }

    async fn train_and_restart(&self) -> Result<(), crate::ports::BotRuntimeError> {
        self.bot_runtime.train().await?;
        self.bot_runtime.restart().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryArtifactStore, InMemoryIntentCatalog, InMemoryTrainingLock};
    use crate::domain::foundation::IntentId;
    use crate::domain::intent::{Intent, ResponseDirective};
    use crate::ports::BotRuntimeError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeRuntime {
        fail_training: bool,
        train_calls: AtomicUsize,
    }

    impl FakeRuntime {
        fn succeeding() -> Self {
            Self {
                fail_training: false,
                train_calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                fail_training: true,
                train_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl BotRuntime for FakeRuntime {
        async fn train(&self) -> Result<(), BotRuntimeError> {
            self.train_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_training {
                Err(BotRuntimeError::ProcessFailed {
                    command: "train".to_string(),
                    status: 1,
                })
            } else {
                Ok(())
            }
        }

        async fn restart(&self) -> Result<(), BotRuntimeError> {
            Ok(())
        }
    }

    fn intent(id: &str, status: IntentStatus) -> Intent {
        Intent::new(IntentId::new(id).unwrap(), status)
            .with_response(ResponseDirective::Text(format!("answer for {}", id)))
    }

    fn catalog() -> Arc<InMemoryIntentCatalog> {
        Arc::new(InMemoryIntentCatalog::with_intents(vec![
            intent("greet", IntentStatus::Active),
            intent("hours", IntentStatus::ToDeploy),
            intent("legacy", IntentStatus::ToArchive),
            intent("prices", IntentStatus::ActiveModified),
        ]))
    }

    fn handler(
        catalog: Arc<InMemoryIntentCatalog>,
        runtime: Arc<FakeRuntime>,
        lock: Arc<InMemoryTrainingLock>,
    ) -> (TrainBotHandler, Arc<InMemoryArtifactStore>) {
        let artifacts = Arc::new(InMemoryArtifactStore::new());
        (
            TrainBotHandler::new(catalog, artifacts.clone(), runtime, lock),
            artifacts,
        )
    }

    async fn status_of(catalog: &InMemoryIntentCatalog, id: &str) -> IntentStatus {
        catalog
            .find_by_id(&IntentId::new(id).unwrap())
            .await
            .unwrap()
            .unwrap()
            .status
    }

    #[tokio::test]
    async fn success_ratchets_statuses() {
        let catalog = catalog();
        let lock = Arc::new(InMemoryTrainingLock::new());
        let (handler, artifacts) = handler(catalog.clone(), Arc::new(FakeRuntime::succeeding()), lock.clone());

        let outcome = handler.handle().await.unwrap();
        assert_eq!(
            outcome,
            TrainingOutcome::Completed {
                deployed: 2,
                archived: 1
            }
        );

        assert_eq!(status_of(&catalog, "greet").await, IntentStatus::Active);
        assert_eq!(status_of(&catalog, "hours").await, IntentStatus::Active);
        assert_eq!(status_of(&catalog, "legacy").await, IntentStatus::Archived);
        assert_eq!(status_of(&catalog, "prices").await, IntentStatus::ActiveModified);

        assert_eq!(artifacts.write_count(), 1);
        assert!(!lock.is_locked().await.unwrap());
    }

    #[tokio::test]
    async fn runtime_failure_leaves_statuses_untouched_and_releases_lock() {
        let catalog = catalog();
        let lock = Arc::new(InMemoryTrainingLock::new());
        let (handler, _) = handler(catalog.clone(), Arc::new(FakeRuntime::failing()), lock.clone());

        let outcome = handler.handle().await.unwrap();
        assert_eq!(outcome, TrainingOutcome::RuntimeFailed);

        assert_eq!(status_of(&catalog, "hours").await, IntentStatus::ToDeploy);
        assert_eq!(status_of(&catalog, "legacy").await, IntentStatus::ToArchive);
        assert!(!lock.is_locked().await.unwrap());
    }

    #[tokio::test]
    async fn concurrent_training_is_rejected() {
        let catalog = catalog();
        let lock = Arc::new(InMemoryTrainingLock::new());
        assert!(lock.try_acquire().await.unwrap());

        let runtime = Arc::new(FakeRuntime::succeeding());
        let (handler, _) = handler(catalog, runtime.clone(), lock.clone());

        let err = handler.handle().await.unwrap_err();
        assert!(matches!(err, TrainingError::AlreadyInProgress));
        assert_eq!(runtime.train_calls.load(Ordering::SeqCst), 0);
        // The rejected request must not release the lock it never held.
        assert!(lock.is_locked().await.unwrap());
    }

    #[tokio::test]
    async fn compile_error_releases_lock() {
        let broken = Intent::new(IntentId::new("broken").unwrap(), IntentStatus::ToDeploy)
            .with_response(ResponseDirective::Button("A;B".to_string()));
        let catalog = Arc::new(InMemoryIntentCatalog::with_intents(vec![broken]));
        let lock = Arc::new(InMemoryTrainingLock::new());
        let (handler, artifacts) = handler(catalog, Arc::new(FakeRuntime::succeeding()), lock.clone());

        let err = handler.handle().await.unwrap_err();
        assert!(matches!(err, TrainingError::Compile(_)));
        assert_eq!(artifacts.write_count(), 0);
        assert!(!lock.is_locked().await.unwrap());
    }
}
