//! Structured view over a dialogue event's raw JSON payload.

use serde::Deserialize;
use serde_json::Value;

/// Parsed payload of a dialogue event.
///
/// Every field is optional: the tracker writes different shapes per event
/// kind, and missing pieces simply contribute nothing to a review item.
#[derive(Debug, Clone, Deserialize)]
pub struct EventPayload {
    /// Free text: the user utterance or the bot response text.
    pub text: Option<String>,

    /// Auxiliary display data attached to bot responses (buttons, images...).
    pub data: Option<Value>,

    /// NLU parse result attached to user events.
    pub parse_data: Option<ParseData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParseData {
    pub intent: Option<ParsedIntent>,
}

/// Recognized intent with confidence, as reported by the NLU pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct ParsedIntent {
    pub name: Option<String>,
    pub confidence: Option<f64>,
}

impl EventPayload {
    /// Name of the recognized intent, if any.
    pub fn intent_name(&self) -> Option<&str> {
        self.parse_data
            .as_ref()?
            .intent
            .as_ref()?
            .name
            .as_deref()
    }

    /// Confidence of the recognized intent, if any.
    pub fn intent_confidence(&self) -> Option<f64> {
        self.parse_data.as_ref()?.intent.as_ref()?.confidence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_payload_exposes_intent_and_confidence() {
        let raw = r#"{
            "event": "user",
            "text": "hello",
            "parse_data": {"intent": {"name": "greet", "confidence": 0.92}}
        }"#;
        let payload: EventPayload = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.text.as_deref(), Some("hello"));
        assert_eq!(payload.intent_name(), Some("greet"));
        assert_eq!(payload.intent_confidence(), Some(0.92));
    }

    #[test]
    fn bot_payload_keeps_auxiliary_data() {
        let raw = r#"{"event": "bot", "text": "hi there", "data": {"buttons": []}}"#;
        let payload: EventPayload = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.text.as_deref(), Some("hi there"));
        assert!(payload.data.is_some());
        assert!(payload.intent_name().is_none());
    }

    #[test]
    fn missing_parse_data_yields_no_intent() {
        let payload: EventPayload = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
        assert!(payload.intent_name().is_none());
        assert!(payload.intent_confidence().is_none());
    }
}
