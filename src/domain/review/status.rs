//! Review item lifecycle status.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Lifecycle status of a review item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// Awaiting review; low or missing recognition confidence.
    #[default]
    Pending,
    /// Awaiting review; the recognizer was confident, a quick check suffices.
    ToVerify,
    /// Validated by a curator; knowledge has been created from it.
    Confirmed,
    /// Soft-deleted; the record is retained.
    Archived,
}

impl StateMachine for ReviewStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ReviewStatus::*;
        matches!(
            (self, target),
            (Pending, Confirmed)
                | (Pending, Archived)
                | (ToVerify, Confirmed)
                | (ToVerify, Archived)
                | (Confirmed, Archived)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ReviewStatus::*;
        match self {
            Pending => vec![Confirmed, Archived],
            ToVerify => vec![Confirmed, Archived],
            Confirmed => vec![Archived],
            Archived => vec![],
        }
    }
}
