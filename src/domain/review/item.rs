//! Review item entity.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{IntentId, ReviewItemId};

use super::ReviewStatus;

/// One bot response captured from a turn, in turn order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotResponse {
    /// Response text, if the bot event carried any.
    pub text: Option<String>,

    /// Auxiliary display data (buttons, images) passed through verbatim.
    pub data: Option<Value>,
}

/// An item of the human review queue, derived from one dialogue turn.
///
/// # Invariants
///
/// - `timestamp` is the max timestamp over the contributing events, so the
///   queue's max timestamp is a watermark that never regresses
/// - `recognized_intent` is a weak reference: resolving it goes through the
///   intent catalog, and a deleted intent never cascades into queue history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewItem {
    /// Unique identifier.
    pub id: ReviewItemId,

    /// Max timestamp among the contributing events.
    pub timestamp: i64,

    /// Conversation the turn belongs to.
    pub sender_id: String,

    /// Id of the first event of the contributing turn.
    pub source_event_id: i64,

    /// User utterance; absent for bot-only turns. Last user event wins.
    pub question: Option<String>,

    /// Intent the NLU pipeline recognized, by identifier.
    pub recognized_intent: Option<IntentId>,

    /// Recognition confidence in [0, 1].
    pub confidence: Option<f64>,

    /// Bot responses of the turn, in turn order.
    pub responses: Vec<BotResponse>,

    /// Lifecycle status.
    pub status: ReviewStatus,
}
