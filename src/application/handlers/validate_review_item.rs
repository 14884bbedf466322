//! ValidateReviewItemHandler - Promotes a reviewed item to knowledge.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, StateMachine};
use crate::domain::intent::{IntentStatus, Knowledge};
use crate::domain::review::ReviewStatus;
use crate::ports::{IntentCatalog, KnowledgeStore, ReviewQueue};

use crate::domain::foundation::ReviewItemId;

/// Command to validate a review item.
#[derive(Debug, Clone)]
pub struct ValidateReviewItemCommand {
    pub item_id: ReviewItemId,
}

/// Result of a successful validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateReviewItemResult {
    /// Whether a new knowledge entry was created (false if one already
    /// existed for the same question).
    pub knowledge_created: bool,
    /// Whether the intent was flipped from `Active` to `ActiveModified`.
    pub intent_marked_modified: bool,
}

/// Handler for validating review items.
///
/// Creates a knowledge entry from the item's question, flags a deployed
/// intent as modified (needs retraining), and confirms the item.
pub struct ValidateReviewItemHandler {
    review_queue: Arc<dyn ReviewQueue>,
    knowledge_store: Arc<dyn KnowledgeStore>,
    intent_catalog: Arc<dyn IntentCatalog>,
}

impl ValidateReviewItemHandler {
    pub fn new(
        review_queue: Arc<dyn ReviewQueue>,
        knowledge_store: Arc<dyn KnowledgeStore>,
        intent_catalog: Arc<dyn IntentCatalog>,
    ) -> Self {
        Self {
            review_queue,
            knowledge_store,
            intent_catalog,
        }
    }

    pub async fn handle(
        &self,
        cmd: ValidateReviewItemCommand,
    ) -> Result<ValidateReviewItemResult, DomainError> {
        // 1. Load the item
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

        // 2. Check the status transition is allowed
        item.status.transition_to(ReviewStatus::Confirmed)?;

        // 3. The item must carry a question and a recognized intent
        let question = item
            .question
            .ok_or_else(|| DomainError::validation("question", "Review item has no question"))?;
        let intent_id = item.recognized_intent.ok_or_else(|| {
            DomainError::validation("recognized_intent", "Review item has no recognized intent")
        })?;

        // 4. Promote to knowledge
        let knowledge = Knowledge::new(intent_id.clone(), question)?;
        let knowledge_created = self.knowledge_store.create_if_absent(&knowledge).await?;

        // 5. A deployed intent whose knowledge changed needs retraining
        let intent_marked_modified = self
            .intent_catalog
            .transition_status(&intent_id, IntentStatus::Active, IntentStatus::ActiveModified)
            .await?;

        // 6. Confirm the item
        self.review_queue
            .update_status(&cmd.item_id, ReviewStatus::Confirmed)
            .await?;

        Ok(ValidateReviewItemResult {
            knowledge_created,
            intent_marked_modified,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryIntentCatalog, InMemoryKnowledgeStore, InMemoryReviewQueue};
    use crate::domain::foundation::IntentId;
    use crate::domain::intent::Intent;
    use crate::domain::review::ReviewItem;

    fn item_for(intent: &str, question: &str) -> ReviewItem {
        ReviewItem {
            id: ReviewItemId::new(),
            timestamp: 100,
            sender_id: "s-1".to_string(),
            source_event_id: 1,
            question: Some(question.to_string()),
            recognized_intent: Some(IntentId::new(intent).unwrap()),
            confidence: Some(0.9),
            responses: Vec::new(),
            status: ReviewStatus::ToVerify,
        }
    }

    fn handler_with(
        queue: Arc<InMemoryReviewQueue>,
        store: Arc<InMemoryKnowledgeStore>,
        catalog: Arc<InMemoryIntentCatalog>,
    ) -> ValidateReviewItemHandler {
        ValidateReviewItemHandler::new(queue, store, catalog)
    }

    #[tokio::test]
    async fn creates_knowledge_and_confirms_item() {
        let item = item_for("greet", "hello there");
        let item_id = item.id;
        let queue = Arc::new(InMemoryReviewQueue::with_items(vec![item]));
        let store = Arc::new(InMemoryKnowledgeStore::new());
        let catalog = Arc::new(InMemoryIntentCatalog::with_intents(vec![Intent::new(
            IntentId::new("greet").unwrap(),
            IntentStatus::Active,
        )]));

        let handler = handler_with(queue.clone(), store.clone(), catalog.clone());
        let result = handler
            .handle(ValidateReviewItemCommand { item_id })
            .await
            .unwrap();

        assert!(result.knowledge_created);
        assert!(result.intent_marked_modified);
        assert_eq!(
            queue.find_by_id(&item_id).await.unwrap().unwrap().status,
            ReviewStatus::Confirmed
        );
        let entries = store
            .find_by_intent(&IntentId::new("greet").unwrap())
            .await
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].question(), "hello there");
    }

    #[tokio::test]
    async fn active_intent_is_marked_modified() {
        let item = item_for("greet", "hello there");
        let item_id = item.id;
        let queue = Arc::new(InMemoryReviewQueue::with_items(vec![item]));
        let store = Arc::new(InMemoryKnowledgeStore::new());
        let catalog = Arc::new(InMemoryIntentCatalog::with_intents(vec![Intent::new(
            IntentId::new("greet").unwrap(),
            IntentStatus::Active,
        )]));

        handler_with(queue, store, catalog.clone())
            .handle(ValidateReviewItemCommand { item_id })
            .await
            .unwrap();

        let intent = catalog
            .find_by_id(&IntentId::new("greet").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(intent.status, IntentStatus::ActiveModified);
    }

    #[tokio::test]
    async fn already_modified_intent_is_left_untouched() {
        let item = item_for("greet", "hello there");
        let item_id = item.id;
        let queue = Arc::new(InMemoryReviewQueue::with_items(vec![item]));
        let store = Arc::new(InMemoryKnowledgeStore::new());
        let catalog = Arc::new(InMemoryIntentCatalog::with_intents(vec![Intent::new(
            IntentId::new("greet").unwrap(),
            IntentStatus::ActiveModified,
        )]));

        let result = handler_with(queue, store, catalog.clone())
            .handle(ValidateReviewItemCommand { item_id })
            .await
            .unwrap();

        assert!(!result.intent_marked_modified);
        let intent = catalog
            .find_by_id(&IntentId::new("greet").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(intent.status, IntentStatus::ActiveModified);
    }

    #[tokio::test]
    async fn fails_when_item_not_found() {
        let queue = Arc::new(InMemoryReviewQueue::new());
        let store = Arc::new(InMemoryKnowledgeStore::new());
        let catalog = Arc::new(InMemoryIntentCatalog::new());

        let err = handler_with(queue, store, catalog)
            .handle(ValidateReviewItemCommand {
                item_id: ReviewItemId::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ReviewItemNotFound);
    }

    #[tokio::test]
    async fn fails_on_bot_only_item_without_question() {
        let mut item = item_for("greet", "hello");
        item.question = None;
        let item_id = item.id;
        let queue = Arc::new(InMemoryReviewQueue::with_items(vec![item]));
        let store = Arc::new(InMemoryKnowledgeStore::new());
        let catalog = Arc::new(InMemoryIntentCatalog::new());

        let err = handler_with(queue, store, catalog)
            .handle(ValidateReviewItemCommand { item_id })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn fails_when_item_already_archived() {
        let mut item = item_for("greet", "hello");
        item.status = ReviewStatus::Archived;
        let item_id = item.id;
        let queue = Arc::new(InMemoryReviewQueue::with_items(vec![item]));
        let store = Arc::new(InMemoryKnowledgeStore::new());
        let catalog = Arc::new(InMemoryIntentCatalog::new());

        let err = handler_with(queue, store, catalog)
            .handle(ValidateReviewItemCommand { item_id })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[tokio::test]
    async fn validating_twice_creates_one_knowledge_entry() {
        let first = item_for("greet", "hello there");
        let mut second = item_for("greet", "hello there");
        second.status = ReviewStatus::Pending;
        let (first_id, second_id) = (first.id, second.id);
        let queue = Arc::new(InMemoryReviewQueue::with_items(vec![first, second]));
        let store = Arc::new(InMemoryKnowledgeStore::new());
        let catalog = Arc::new(InMemoryIntentCatalog::with_intents(vec![Intent::new(
            IntentId::new("greet").unwrap(),
            IntentStatus::Active,
        )]));

        let handler = handler_with(queue, store.clone(), catalog);
        let one = handler
            .handle(ValidateReviewItemCommand { item_id: first_id })
            .await
            .unwrap();
        let two = handler
            .handle(ValidateReviewItemCommand { item_id: second_id })
            .await
            .unwrap();

        assert!(one.knowledge_created);
        assert!(!two.knowledge_created);
        let entries = store
            .find_by_intent(&IntentId::new("greet").unwrap())
            .await
            .unwrap();
        assert_eq!(entries.len(), 1);
    }
}
