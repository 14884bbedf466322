//! Knowledge entry entity.
//!
//! A knowledge entry is a validated question attached to an intent. Entries
//! are created when a review item is confirmed and are immutable afterwards;
//! there is no update path.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{IntentId, KnowledgeId, Timestamp, ValidationError};

/// A validated question/intent pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Knowledge {
    id: KnowledgeId,
    intent_id: IntentId,
    question: String,
    created_at: Timestamp,
}

impl Knowledge {
    /// Creates a new knowledge entry.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the question is empty
    pub fn new(intent_id: IntentId, question: impl Into<String>) -> Result<Self, ValidationError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(ValidationError::empty_field("question"));
        }
        Ok(Self {
            id: KnowledgeId::new(),
            intent_id,
            question,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitutes an entry from persistence (no validation).
    pub fn reconstitute(
        id: KnowledgeId,
        intent_id: IntentId,
        question: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            intent_id,
            question,
            created_at,
        }
    }

    pub fn id(&self) -> &KnowledgeId {
        &self.id
    }

    pub fn intent_id(&self) -> &IntentId {
        &self.intent_id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}
