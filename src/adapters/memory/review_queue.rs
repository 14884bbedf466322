//! In-memory review queue.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode, ReviewItemId};
use crate::domain::review::{ReviewItem, ReviewStatus};
use crate::ports::ReviewQueue;

/// In-memory review queue.
///
/// Batch saves are trivially atomic: items are appended under one lock hold.
pub struct InMemoryReviewQueue {
    items: Mutex<Vec<ReviewItem>>,
}

impl InMemoryReviewQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    /// Creates a queue pre-filled with items.
    pub fn with_items(items: Vec<ReviewItem>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }

    // === Test Helpers ===

    /// Number of stored items.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn len(&self) -> usize {
        self.items
            .lock()
            .expect("InMemoryReviewQueue: lock poisoned")
            .len()
    }

    /// True if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All items in insertion order (for test assertions).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn all(&self) -> Vec<ReviewItem> {
        self.items
            .lock()
            .expect("InMemoryReviewQueue: lock poisoned")
            .clone()
    }
}

impl Default for InMemoryReviewQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReviewQueue for InMemoryReviewQueue {
    async fn max_timestamp(&self) -> Result<Option<i64>, DomainError> {
        Ok(self
            .items
            .lock()
            .expect("InMemoryReviewQueue: lock poisoned")
            .iter()
            .map(|item| item.timestamp)
            .max())
    }

    async fn save_batch(&self, items: &[ReviewItem]) -> Result<(), DomainError> {
        self.items
            .lock()
            .expect("InMemoryReviewQueue: lock poisoned")
            .extend_from_slice(items);
        Ok(())
    }

    async fn find_by_id(&self, id: &ReviewItemId) -> Result<Option<ReviewItem>, DomainError> {
        Ok(self
            .items
            .lock()
            .expect("InMemoryReviewQueue: lock poisoned")
            .iter()
            .find(|item| &item.id == id)
            .cloned())
    }

    async fn find_by_status(&self, status: ReviewStatus) -> Result<Vec<ReviewItem>, DomainError> {
        let mut items: Vec<ReviewItem> = self
            .items
            .lock()
            .expect("InMemoryReviewQueue: lock poisoned")
            .iter()
            .filter(|item| item.status == status)
            .cloned()
            .collect();
        items.sort_by_key(|item| std::cmp::Reverse(item.timestamp));
        Ok(items)
    }

    async fn update_status(
        &self,
        id: &ReviewItemId,
        status: ReviewStatus,
    ) -> Result<(), DomainError> {
        let mut items = self
            .items
            .lock()
            .expect("InMemoryReviewQueue: lock poisoned");
        let item = items.iter_mut().find(|item| &item.id == id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::ReviewItemNotFound,
                format!("Review item not found: {}", id),
            )
        })?;
        item.status = status;
        Ok(())
    }
}
