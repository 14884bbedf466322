//! Conversation segmenter.
//!
//! Partitions a timestamp-ordered slice of dialogue events into turns and
//! derives one review item per eligible turn. Pure: persistence and watermark
//! bookkeeping live in the application layer.

use tracing::warn;

use crate::domain::event::{DialogueEvent, EventKind};
use crate::domain::foundation::{IntentId, ReviewItemId};

use super::{BotResponse, ReviewItem, ReviewStatus};

/// Recognition confidence above which a review item starts as `ToVerify`
/// instead of `Pending`.
pub const VERIFY_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Segments new events into review items.
///
/// `events` must be every event strictly after the current watermark, in
/// ascending timestamp order. An empty input produces an empty output.
///
/// Turns are delimited by the listen marker (inclusive). A trailing remainder
/// with no marker is an open turn: it is held back entirely, so it is
/// revisited intact on a later run once its marker has arrived. Turns with no
/// user or bot event are discarded.
pub fn segment(events: &[DialogueEvent]) -> Vec<ReviewItem> {
    let mut items = Vec::new();
    let mut remaining = events;

    while let Some(end) = remaining.iter().position(DialogueEvent::is_listen_marker) {
        let (turn, rest) = remaining.split_at(end + 1);
        if turn
            .iter()
            .any(|e| matches!(e.kind, EventKind::User | EventKind::Bot))
        {
            items.push(item_from_turn(turn));
        }
        remaining = rest;
    }

    items
}

/// Derives a review item from one eligible turn.
fn item_from_turn(turn: &[DialogueEvent]) -> ReviewItem {
    let first = &turn[0];
    let mut item = ReviewItem {
        id: ReviewItemId::new(),
        timestamp: turn.iter().map(|e| e.timestamp).max().unwrap_or(first.timestamp),
        sender_id: first.sender_id.clone(),
        source_event_id: first.id,
        question: None,
        recognized_intent: None,
        confidence: None,
        responses: Vec::new(),
        status: ReviewStatus::default(),
    };

    for event in turn {
        if event.kind == EventKind::Action {
            continue;
        }
        let payload = match event.parse_payload() {
            Ok(payload) => payload,
            Err(err) => {
                warn!(event_id = event.id, error = %err, "skipping malformed event payload");
                continue;
            }
        };
        match event.kind {
            EventKind::Bot => item.responses.push(BotResponse {
                text: payload.text,
                data: payload.data,
            }),
            EventKind::User => {
                item.recognized_intent = payload
                    .intent_name()
                    .and_then(|name| IntentId::new(name).ok());
                item.confidence = payload.intent_confidence();
                item.question = payload.text;
                item.status = match item.confidence {
                    Some(confidence) if confidence > VERIFY_CONFIDENCE_THRESHOLD => {
                        ReviewStatus::ToVerify
                    }
                    _ => ReviewStatus::Pending,
                };
            }
            EventKind::Action => unreachable!(),
        }
    }

    item
}
