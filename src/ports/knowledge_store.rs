//! Knowledge store port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, IntentId};
use crate::domain::intent::Knowledge;

/// Persistence port for validated knowledge entries.
///
/// Entries are immutable once created; there is no update operation.
#[async_trait]
pub trait KnowledgeStore: Send + Sync {
    /// Persists a knowledge entry unless an identical question already exists
    /// for the same intent. Returns whether a new entry was created.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn create_if_absent(&self, knowledge: &Knowledge) -> Result<bool, DomainError>;

    /// Lists entries for one intent, oldest first.
    async fn find_by_intent(&self, intent_id: &IntentId) -> Result<Vec<Knowledge>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knowledge_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn KnowledgeStore) {}
    }
}
