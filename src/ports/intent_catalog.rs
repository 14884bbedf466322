//! Intent catalog port.
//!
//! The catalog is the one resource mutated by two independent writers (the
//! review-validation path and the training-completion path). Both mutations
//! are narrow conditional status updates; implementations must perform them
//! atomically, never as read-modify-write.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, IntentId};
use crate::domain::intent::{Intent, IntentStatus};

/// Persistence port for the intent catalog.
#[async_trait]
pub trait IntentCatalog: Send + Sync {
    /// Returns the full catalog, with responses and knowledge loaded, in a
    /// stable repeatable order. Compiled artifacts are deterministic only
    /// under that ordering guarantee.
    async fn find_full(&self) -> Result<Vec<Intent>, DomainError>;

    /// Finds one intent by id.
    async fn find_by_id(&self, id: &IntentId) -> Result<Option<Intent>, DomainError>;

    /// Atomically transitions one intent's status, only if its current
    /// status equals `from`. Returns whether the transition happened.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn transition_status(
        &self,
        id: &IntentId,
        from: IntentStatus,
        to: IntentStatus,
    ) -> Result<bool, DomainError>;

    /// Atomically transitions every intent whose status is in `from` to `to`.
    /// Returns the number of intents transitioned.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn transition_all(
        &self,
        from: &[IntentStatus],
        to: IntentStatus,
    ) -> Result<u64, DomainError>;
}
