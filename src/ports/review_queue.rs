//! Review queue port.
//!
//! Stores the items produced by the segmenter. The queue's max timestamp is
//! the segmentation watermark: it defines where the next run resumes, so
//! batch persistence must be all-or-nothing.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ReviewItemId};
use crate::domain::review::{ReviewItem, ReviewStatus};

/// Persistence port for review items.
#[async_trait]
pub trait ReviewQueue: Send + Sync {
    /// Max timestamp among persisted items, or `None` for an empty queue.
    ///
    /// This is the segmentation watermark; it must never regress.
    async fn max_timestamp(&self) -> Result<Option<i64>, DomainError>;

    /// Persists a whole segmentation batch atomically.
    ///
    /// A failed save must not commit any item of the batch: the watermark
    /// then stays unchanged and the same event window is retried on the next
    /// scheduled run.
    ///
    /// # Errors
    ///
    /// - `QueueError` on persistence failure
    async fn save_batch(&self, items: &[ReviewItem]) -> Result<(), DomainError>;

    /// Finds an item by id.
    async fn find_by_id(&self, id: &ReviewItemId) -> Result<Option<ReviewItem>, DomainError>;

    /// Lists items with the given status, newest first.
    async fn find_by_status(&self, status: ReviewStatus) -> Result<Vec<ReviewItem>, DomainError>;

    /// Sets an item's status.
    ///
    /// # Errors
    ///
    /// - `ReviewItemNotFound` if the item doesn't exist
    /// - `QueueError` on persistence failure
    async fn update_status(
        &self,
        id: &ReviewItemId,
        status: ReviewStatus,
    ) -> Result<(), DomainError>;
}
