//! Immutable dialogue event entity.

use serde::{Deserialize, Serialize};

use super::payload::EventPayload;

/// Action name the dialogue engine emits when it is ready for the next user
/// input. Segmentation splits the event stream into turns at this marker.
pub const ACTION_LISTEN: &str = "action_listen";

/// Kind of tracker event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Internal engine action (policy prediction, listen marker, ...).
    Action,
    /// A user utterance, with recognized intent and confidence in the payload.
    User,
    /// A bot response, with text and auxiliary display data in the payload.
    Bot,
}

/// An immutable entry of the dialogue event log.
///
/// # Invariants
///
/// - Events are strictly ordered by `timestamp` within the log (not unique)
/// - `action_name` is present for `Action` events
/// - `data` holds the raw JSON payload as written by the tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueEvent {
    /// Log-assigned identifier, unique and increasing.
    pub id: i64,

    /// Event time as a unix timestamp. Monotonic-ish, ties possible.
    pub timestamp: i64,

    /// Conversation the event belongs to.
    pub sender_id: String,

    /// Kind of event.
    pub kind: EventKind,

    /// Name of the executed action, for `Action` events.
    pub action_name: Option<String>,

    /// Raw JSON payload.
    pub data: String,
}

impl DialogueEvent {
    /// True if this event marks the end of a turn (engine waiting for input).
    pub fn is_listen_marker(&self) -> bool {
        self.action_name.as_deref() == Some(ACTION_LISTEN)
    }

    /// Parses the raw payload.
    ///
    /// # Errors
    ///
    /// Returns the underlying JSON error if the payload is malformed. Callers
    /// treat this as fail-soft: the event's field contribution is skipped.
    pub fn parse_payload(&self) -> Result<EventPayload, serde_json::Error> {
        serde_json::from_str(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(name: &str) -> DialogueEvent {
        DialogueEvent {
            id: 1,
            timestamp: 10,
            sender_id: "s-1".to_string(),
            kind: EventKind::Action,
            action_name: Some(name.to_string()),
            data: "{}".to_string(),
        }
    }

    #[test]
    fn listen_marker_is_detected_by_action_name() {
        assert!(action(ACTION_LISTEN).is_listen_marker());
        assert!(!action("action_restart").is_listen_marker());
    }

    #[test]
    fn malformed_payload_surfaces_a_parse_error() {
        let mut event = action(ACTION_LISTEN);
        event.data = "{not json".to_string();
        assert!(event.parse_payload().is_err());
    }
}
