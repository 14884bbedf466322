//! In-memory knowledge store.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, IntentId};
use crate::domain::intent::Knowledge;
use crate::ports::KnowledgeStore;

/// In-memory knowledge store.
pub struct InMemoryKnowledgeStore {
    entries: Mutex<Vec<Knowledge>>,
}

impl InMemoryKnowledgeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryKnowledgeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KnowledgeStore for InMemoryKnowledgeStore {
    async fn create_if_absent(&self, knowledge: &Knowledge) -> Result<bool, DomainError> {
        let mut entries = self
            .entries
            .lock()
            .expect("InMemoryKnowledgeStore: lock poisoned");
        let exists = entries.iter().any(|entry| {
            entry.intent_id() == knowledge.intent_id() && entry.question() == knowledge.question()
        });
        if exists {
            return Ok(false);
        }
        entries.push(knowledge.clone());
        Ok(true)
    }

    async fn find_by_intent(&self, intent_id: &IntentId) -> Result<Vec<Knowledge>, DomainError> {
        Ok(self
            .entries
            .lock()
            .expect("InMemoryKnowledgeStore: lock poisoned")
            .iter()
            .filter(|entry| entry.intent_id() == intent_id)
            .cloned()
            .collect())
    }
}
