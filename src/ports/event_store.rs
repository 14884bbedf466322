//! Event store port (read side).
//!
//! The dialogue engine's tracker owns the event log; this port only reads it.
//! The log is append-only and strictly time-ordered.

use async_trait::async_trait;

use crate::domain::event::DialogueEvent;
use crate::domain::foundation::DomainError;

/// Read port over the append-only dialogue event log.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Returns all events with `timestamp > watermark`, ascending by
    /// timestamp.
    ///
    /// The comparison is strict: an event sharing the watermark's exact
    /// timestamp is never returned again.
    ///
    /// # Errors
    ///
    /// - `EventStoreError` on read failure
    async fn events_after(&self, watermark: i64) -> Result<Vec<DialogueEvent>, DomainError>;
}
