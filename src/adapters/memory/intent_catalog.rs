//! In-memory intent catalog.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, IntentId};
use crate::domain::intent::{Intent, IntentStatus};
use crate::ports::IntentCatalog;

/// In-memory intent catalog.
///
/// Iteration order is insertion order, which satisfies the stable-ordering
/// requirement of `find_full`. Conditional updates run under one lock hold,
/// which makes them atomic.
pub struct InMemoryIntentCatalog {
    intents: Mutex<Vec<Intent>>,
}

impl InMemoryIntentCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            intents: Mutex::new(Vec::new()),
        }
    }

    /// Creates a catalog pre-filled with intents.
    pub fn with_intents(intents: Vec<Intent>) -> Self {
        Self {
            intents: Mutex::new(intents),
        }
    }
}

impl Default for InMemoryIntentCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IntentCatalog for InMemoryIntentCatalog {
    async fn find_full(&self) -> Result<Vec<Intent>, DomainError> {
        Ok(self
            .intents
            .lock()
            .expect("InMemoryIntentCatalog: lock poisoned")
            .clone())
    }

    async fn find_by_id(&self, id: &IntentId) -> Result<Option<Intent>, DomainError> {
        Ok(self
            .intents
            .lock()
            .expect("InMemoryIntentCatalog: lock poisoned")
            .iter()
            .find(|intent| &intent.id == id)
            .cloned())
    }

    async fn transition_status(
        &self,
        id: &IntentId,
        from: IntentStatus,
        to: IntentStatus,
    ) -> Result<bool, DomainError> {
        let mut intents = self
            .intents
            .lock()
            .expect("InMemoryIntentCatalog: lock poisoned");
        match intents
            .iter_mut()
            .find(|intent| &intent.id == id && intent.status == from)
        {
            Some(intent) => {
                intent.status = to;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn transition_all(
        &self,
        from: &[IntentStatus],
        to: IntentStatus,
    ) -> Result<u64, DomainError> {
        let mut intents = self
            .intents
            .lock()
            .expect("InMemoryIntentCatalog: lock poisoned");
        let mut transitioned = 0;
        for intent in intents.iter_mut().filter(|i| from.contains(&i.status)) {
            intent.status = to;
            transitioned += 1;
        }
        Ok(transitioned)
    }
}
