//! Process-scoped training lock.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::foundation::DomainError;
use crate::ports::TrainingLock;

/// Process-scoped training lock backed by an atomic flag.
///
/// Acquisition is a compare-and-swap, so two concurrent training requests
/// can never both win.
pub struct InMemoryTrainingLock {
    locked: AtomicBool,
}

impl InMemoryTrainingLock {
    /// Creates a released lock.
    pub fn new() -> Self {
        Self {
            locked: AtomicBool::new(false),
        }
    }
}

impl Default for InMemoryTrainingLock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TrainingLock for InMemoryTrainingLock {
    async fn try_acquire(&self) -> Result<bool, DomainError> {
        Ok(self
            .locked
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok())
    }

    async fn release(&self) -> Result<(), DomainError> {
        self.locked.store(false, Ordering::SeqCst);
        Ok(())
    }

    async fn is_locked(&self) -> Result<bool, DomainError> {
        Ok(self.locked.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn second_acquire_fails_until_release() {
        let lock = InMemoryTrainingLock::new();
        assert!(lock.try_acquire().await.unwrap());
        assert!(!lock.try_acquire().await.unwrap());

        lock.release().await.unwrap();
        assert!(lock.try_acquire().await.unwrap());
    }

    #[tokio::test]
    async fn release_is_idempotent() {
        let lock = InMemoryTrainingLock::new();
        lock.release().await.unwrap();
        lock.release().await.unwrap();
        assert!(!lock.is_locked().await.unwrap());
    }
}
