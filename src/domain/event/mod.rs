//! Dialogue event log entries.
//!
//! Events are produced by the dialogue engine's tracker and are append-only:
//! the back office reads them, never mutates or deletes them. The structured
//! payload is kept as raw JSON and parsed lazily so that one malformed event
//! cannot poison a whole segmentation batch.

mod event;
mod payload;

pub use event::{DialogueEvent, EventKind, ACTION_LISTEN};
pub use payload::{EventPayload, ParsedIntent};
