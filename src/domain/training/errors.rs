//! Compilation error types.

use thiserror::Error;

use crate::domain::intent::DirectiveKind;

/// Errors raised while compiling the intent catalog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    /// An image/button/quick-reply directive has nothing to attach to.
    /// Rejected rather than silently producing a corrupt domain entry.
    #[error(
        "intent '{intent}': {kind} directive at index {index} has no preceding text directive"
    )]
    DanglingDirective {
        intent: String,
        index: usize,
        kind: DirectiveKind,
    },
}
