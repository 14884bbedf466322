//! Intent deployment lifecycle status.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Deployment status of an intent.
///
/// Transitions are ratchet-like and driven only by the review-validation and
/// training workflows, never freely settable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentStatus {
    /// Deployed and part of the currently trained model.
    Active,
    /// Deployed, but its knowledge changed since the last training.
    ActiveModified,
    /// Staged for deployment on the next training run.
    ToDeploy,
    /// Staged for removal on the next training run.
    ToArchive,
    /// Removed from the model; record retained.
    Archived,
}

impl StateMachine for IntentStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use IntentStatus::*;
        matches!(
            (self, target),
            (Active, ActiveModified)
                | (Active, ToArchive)
                | (ActiveModified, ToDeploy)
                | (ActiveModified, ToArchive)
                | (ToDeploy, Active)
                | (ToDeploy, ToArchive)
                | (ToArchive, Archived)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use IntentStatus::*;
        match self {
            Active => vec![ActiveModified, ToArchive],
            ActiveModified => vec![ToDeploy, ToArchive],
            ToDeploy => vec![Active, ToArchive],
            ToArchive => vec![Archived],
            Archived => vec![],
        }
    }
}
