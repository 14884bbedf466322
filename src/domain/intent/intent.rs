//! Intent entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::IntentId;

use super::{IntentStatus, Knowledge, ResponseDirective};

/// An intent of the catalog, with its responses and validated knowledge.
///
/// The catalog must expose intents in a stable, repeatable order; compiled
/// artifacts are deterministic only under that assumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    /// Identifier, doubling as the human-readable label.
    pub id: IntentId,

    /// Canonical phrasing of the question this intent answers.
    pub main_question: Option<String>,

    /// Deployment lifecycle status.
    pub status: IntentStatus,

    /// Ordered response directives. Order is the compiler's grouping key.
    pub responses: Vec<ResponseDirective>,

    /// Knowledge entries referencing this intent.
    pub knowledges: Vec<Knowledge>,
}

impl Intent {
    /// Creates an intent with no responses or knowledge yet.
    pub fn new(id: IntentId, status: IntentStatus) -> Self {
        Self {
            id,
            main_question: None,
            status,
            responses: Vec::new(),
            knowledges: Vec::new(),
        }
    }

    /// Sets the canonical question.
    pub fn with_main_question(mut self, question: impl Into<String>) -> Self {
        self.main_question = Some(question.into());
        self
    }

    /// Appends a response directive.
    pub fn with_response(mut self, directive: ResponseDirective) -> Self {
        self.responses.push(directive);
        self
    }

    /// Appends a knowledge entry.
    pub fn with_knowledge(mut self, knowledge: Knowledge) -> Self {
        self.knowledges.push(knowledge);
        self
    }
}
