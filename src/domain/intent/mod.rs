//! Intent catalog domain module.
//!
//! Intents carry a canonical question, an ordered response directive
//! sequence, validated knowledge entries, and a deployment lifecycle status
//! ratcheted by the review and training workflows.

mod directive;
mod intent;
mod knowledge;
mod status;

pub use directive::{DirectiveKind, ResponseDirective};
pub use intent::Intent;
pub use knowledge::Knowledge;
pub use status::IntentStatus;
