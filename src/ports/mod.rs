//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Data Ports
//!
//! - `EventStore` - Read access to the dialogue engine's event log
//! - `ReviewQueue` - Persistence for segmented review items
//! - `KnowledgeStore` - Persistence for validated knowledge entries
//! - `IntentCatalog` - Persistence for intents, with atomic conditional
//!   status transitions
//!
//! ## Training Ports
//!
//! - `ArtifactStore` - Writes the three compiled artifacts in fixed order
//! - `BotRuntime` - External training process and serving relaunch
//! - `TrainingLock` - Mutual exclusion around compile-and-train

mod artifact_store;
mod bot_runtime;
mod event_store;
mod intent_catalog;
mod knowledge_store;
mod review_queue;
mod training_lock;

pub use artifact_store::{ArtifactStore, ArtifactStoreError};
pub use bot_runtime::{BotRuntime, BotRuntimeError};
pub use event_store::EventStore;
pub use intent_catalog::IntentCatalog;
pub use knowledge_store::KnowledgeStore;
pub use review_queue::ReviewQueue;
pub use training_lock::TrainingLock;
