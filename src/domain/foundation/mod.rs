//! Shared domain primitives.
//!
//! Value objects and traits used across the domain layer:
//! identifiers, timestamps, errors, and the state machine trait
//! implemented by lifecycle status enums.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{IntentId, KnowledgeId, ReviewItemId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
