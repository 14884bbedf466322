//! Dialog Foundry - Knowledge Lifecycle Back Office
//!
//! This crate turns a conversational agent's dialogue-event stream into
//! reviewable knowledge and compiles the curated intent catalog into the
//! training artifacts the dialogue engine consumes.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
