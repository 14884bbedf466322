//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, errors, state machine)
//! - `event` - Dialogue event log entries and payload extraction
//! - `review` - Review queue items and the conversation segmenter
//! - `intent` - Intent catalog entities and lifecycle status
//! - `training` - Training artifact models and the knowledge compiler

pub mod event;
pub mod foundation;
pub mod intent;
pub mod review;
pub mod training;
