//! SegmentDialogueHandler - Periodic segmentation of new dialogue events.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::DomainError;
use crate::domain::review::segment;
use crate::ports::{EventStore, ReviewQueue};

/// Result of one segmentation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentDialogueResult {
    /// Watermark the run resumed from.
    pub watermark: i64,
    /// Events read from the log.
    pub events_read: usize,
    /// Review items persisted.
    pub items_created: usize,
}

/// Handler for one segmentation run.
///
/// Reads every event strictly after the queue's watermark, segments it, and
/// persists the derived items as a single batch. A failed batch leaves the
/// watermark unchanged, so the same window is naturally retried on the next
/// scheduled run.
pub struct SegmentDialogueHandler {
    event_store: Arc<dyn EventStore>,
    review_queue: Arc<dyn ReviewQueue>,
}

impl SegmentDialogueHandler {
    pub fn new(event_store: Arc<dyn EventStore>, review_queue: Arc<dyn ReviewQueue>) -> Self {
        Self {
            event_store,
            review_queue,
        }
    }

    pub async fn handle(&self) -> Result<SegmentDialogueResult, DomainError> {
        // 1. Resume from the watermark
        let watermark = self.review_queue.max_timestamp().await?.unwrap_or(0);

        // 2. Read new events, ascending
        let events = self.event_store.events_after(watermark).await?;
        if events.is_empty() {
            return Ok(SegmentDialogueResult {
                watermark,
                events_read: 0,
                items_created: 0,
            });
        }

        // 3. Segment and persist as one batch
        let items = segment(&events);
        if !items.is_empty() {
            self.review_queue.save_batch(&items).await?;
            info!(
                watermark,
                events = events.len(),
                items = items.len(),
                "segmented new dialogue events"
            );
        }

        Ok(SegmentDialogueResult {
            watermark,
            events_read: events.len(),
            items_created: items.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryEventStore, InMemoryReviewQueue};
    use crate::domain::event::{DialogueEvent, EventKind, ACTION_LISTEN};
    use crate::domain::review::ReviewStatus;

    fn listen(id: i64, timestamp: i64) -> DialogueEvent {
        DialogueEvent {
            id,
            timestamp,
            sender_id: "s-1".to_string(),
            kind: EventKind::Action,
            action_name: Some(ACTION_LISTEN.to_string()),
            data: "{}".to_string(),
        }
    }

    fn user(id: i64, timestamp: i64, text: &str, confidence: f64) -> DialogueEvent {
        DialogueEvent {
            id,
            timestamp,
            sender_id: "s-1".to_string(),
            kind: EventKind::User,
            action_name: None,
            data: format!(
                r#"{{"event": "user", "text": "{}", "parse_data": {{"intent": {{"name": "greet", "confidence": {}}}}}}}"#,
                text, confidence
            ),
        }
    }

    fn bot(id: i64, timestamp: i64, text: &str) -> DialogueEvent {
        DialogueEvent {
            id,
            timestamp,
            sender_id: "s-1".to_string(),
            kind: EventKind::Bot,
            action_name: None,
            data: format!(r#"{{"event": "bot", "text": "{}"}}"#, text),
        }
    }

    #[tokio::test]
    async fn empty_log_is_a_no_op() {
        let store = Arc::new(InMemoryEventStore::new());
        let queue = Arc::new(InMemoryReviewQueue::new());
        let handler = SegmentDialogueHandler::new(store, queue.clone());

        let result = handler.handle().await.unwrap();
        assert_eq!(result.events_read, 0);
        assert_eq!(result.items_created, 0);
        assert_eq!(queue.len(), 0);
    }

    #[tokio::test]
    async fn segments_and_persists_new_events() {
        let store = Arc::new(InMemoryEventStore::new());
        store.append(listen(1, 10));
        store.append(user(2, 11, "hello", 0.9));
        store.append(bot(3, 12, "hi there"));
        store.append(listen(4, 13));
        let queue = Arc::new(InMemoryReviewQueue::new());

        let handler = SegmentDialogueHandler::new(store, queue.clone());
        let result = handler.handle().await.unwrap();

        assert_eq!(result.watermark, 0);
        assert_eq!(result.events_read, 4);
        assert_eq!(result.items_created, 1);

        let pending = queue.find_by_status(ReviewStatus::ToVerify).await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].question.as_deref(), Some("hello"));
        assert_eq!(pending[0].timestamp, 13);
    }

    #[tokio::test]
    async fn rerun_without_new_events_creates_nothing() {
        let store = Arc::new(InMemoryEventStore::new());
        store.append(user(1, 11, "hello", 0.9));
        store.append(listen(2, 12));
        let queue = Arc::new(InMemoryReviewQueue::new());

        let handler = SegmentDialogueHandler::new(store.clone(), queue.clone());
        let first = handler.handle().await.unwrap();
        assert_eq!(first.items_created, 1);

        let second = handler.handle().await.unwrap();
        assert_eq!(second.watermark, 12);
        assert_eq!(second.events_read, 0);
        assert_eq!(second.items_created, 0);
        assert_eq!(queue.len(), 1);
    }

    #[tokio::test]
    async fn held_back_turn_is_emitted_once_its_marker_arrives() {
        let store = Arc::new(InMemoryEventStore::new());
        store.append(user(1, 11, "hello", 0.9));
        store.append(listen(2, 12));
        store.append(user(3, 13, "one more", 0.8));
        let queue = Arc::new(InMemoryReviewQueue::new());

        let handler = SegmentDialogueHandler::new(store.clone(), queue.clone());
        handler.handle().await.unwrap();
        assert_eq!(queue.len(), 1);

        // The open turn stays out of the queue and out of the watermark until
        // its marker shows up.
        store.append(bot(4, 14, "noted"));
        store.append(listen(5, 15));
        let result = handler.handle().await.unwrap();
        assert_eq!(result.watermark, 12);
        assert_eq!(result.items_created, 1);
        assert_eq!(queue.len(), 2);

        let items = queue.all();
        assert_eq!(items[1].question.as_deref(), Some("one more"));
        assert_eq!(items[1].responses.len(), 1);
    }
}
