//! ArchiveReviewItemHandler - Soft-deletes a review item.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, ReviewItemId, StateMachine};
use crate::domain::review::ReviewStatus;
use crate::ports::ReviewQueue;

/// Command to archive a review item.
#[derive(Debug, Clone)]
pub struct ArchiveReviewItemCommand {
    pub item_id: ReviewItemId,
}

/// Handler for archiving review items.
///
/// Archival is a soft delete: the record is retained, and its timestamp keeps
/// counting toward the segmentation watermark.
pub struct ArchiveReviewItemHandler {
    review_queue: Arc<dyn ReviewQueue>,
}

impl ArchiveReviewItemHandler {
    pub fn new(review_queue: Arc<dyn ReviewQueue>) -> Self {
        Self { review_queue }
    }

    pub async fn handle(&self, cmd: ArchiveReviewItemCommand) -> Result<(), DomainError> {
        let item = self
            .review_queue
            .find_by_id(&cmd.item_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ReviewItemNotFound,
                    format!("Review item not found: {}", cmd.item_id),
                )
            })?;

        item.status.transition_to(ReviewStatus::Archived)?;

        self.review_queue
            .update_status(&cmd.item_id, ReviewStatus::Archived)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryReviewQueue;
    use crate::domain::review::ReviewItem;

    fn pending_item() -> ReviewItem {
        ReviewItem {
            id: ReviewItemId::new(),
            timestamp: 100,
            sender_id: "s-1".to_string(),
            source_event_id: 1,
            question: Some("hello".to_string()),
            recognized_intent: None,
            confidence: None,
            responses: Vec::new(),
            status: ReviewStatus::Pending,
        }
    }

    #[tokio::test]
    async fn archives_and_retains_the_record() {
        let item = pending_item();
        let item_id = item.id;
        let queue = Arc::new(InMemoryReviewQueue::with_items(vec![item]));

        ArchiveReviewItemHandler::new(queue.clone())
            .handle(ArchiveReviewItemCommand { item_id })
            .await
            .unwrap();

        let archived = queue.find_by_id(&item_id).await.unwrap().unwrap();
        assert_eq!(archived.status, ReviewStatus::Archived);
        assert_eq!(queue.len(), 1);
    }

    #[tokio::test]
    async fn fails_when_item_not_found() {
        let queue = Arc::new(InMemoryReviewQueue::new());
        let err = ArchiveReviewItemHandler::new(queue)
            .handle(ArchiveReviewItemCommand {
                item_id: ReviewItemId::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ReviewItemNotFound);
    }

    #[tokio::test]
    async fn archiving_twice_fails() {
        let mut item = pending_item();
        item.status = ReviewStatus::Archived;
        let item_id = item.id;
        let queue = Arc::new(InMemoryReviewQueue::with_items(vec![item]));

        let result = ArchiveReviewItemHandler::new(queue)
            .handle(ArchiveReviewItemCommand { item_id })
            .await;
        assert!(result.is_err());
    }
}
