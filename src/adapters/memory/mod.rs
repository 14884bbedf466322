//! In-memory adapters.
//!
//! Synchronous, deterministic port implementations used by tests and by the
//! daemon scaffold. They use `.expect()` on lock operations, which panics if
//! a lock is poisoned; production deployments replace them with persistent
//! adapters.

mod artifact_store;
mod event_store;
mod intent_catalog;
mod knowledge_store;
mod review_queue;
mod training_lock;

pub use artifact_store::InMemoryArtifactStore;
pub use event_store::InMemoryEventStore;
pub use intent_catalog::InMemoryIntentCatalog;
pub use knowledge_store::InMemoryKnowledgeStore;
pub use review_queue::InMemoryReviewQueue;
pub use training_lock::InMemoryTrainingLock;
