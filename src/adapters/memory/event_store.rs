//! In-memory event store.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::event::DialogueEvent;
use crate::domain::foundation::DomainError;
use crate::ports::EventStore;

/// In-memory append-only event log.
pub struct InMemoryEventStore {
    events: Mutex<Vec<DialogueEvent>>,
}

impl InMemoryEventStore {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Appends one event, as the dialogue engine's tracker would.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn append(&self, event: DialogueEvent) {
        self.events
            .lock()
            .expect("InMemoryEventStore: lock poisoned")
            .push(event);
    }
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn events_after(&self, watermark: i64) -> Result<Vec<DialogueEvent>, DomainError> {
        let mut events: Vec<DialogueEvent> = self
            .events
            .lock()
            .expect("InMemoryEventStore: lock poisoned")
            .iter()
            .filter(|e| e.timestamp > watermark)
            .cloned()
            .collect();
        events.sort_by_key(|e| (e.timestamp, e.id));
        Ok(events)
    }
}
