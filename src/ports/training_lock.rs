//! Training lock port.
//!
//! The compiler is not safe to re-enter against a half-updated catalog, so
//! at most one training run may be in flight. Acquisition must be atomic
//! (mutual exclusion, not a courtesy check) and release is guaranteed by the
//! orchestrator on every exit path.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Mutual-exclusion lock around compile-and-train.
#[async_trait]
pub trait TrainingLock: Send + Sync {
    /// Attempts to acquire the lock. Returns `false` if a training run is
    /// already in progress. The check-and-set must be atomic.
    ///
    /// # Errors
    ///
    /// - `StorageError` if the lock state cannot be read or written
    async fn try_acquire(&self) -> Result<bool, DomainError>;

    /// Releases the lock. Safe to call whether or not training succeeded.
    ///
    /// # Errors
    ///
    /// - `StorageError` if the lock state cannot be written
    async fn release(&self) -> Result<(), DomainError>;

    /// Whether a training run is currently in progress.
    async fn is_locked(&self) -> Result<bool, DomainError>;
}
