//! Response construction directives.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One ordered response-construction instruction of an intent.
///
/// Ordering within the intent's sequence is significant: `Image`, `Button`
/// and `QuickReply` attach to the nearest preceding `Text` directive when the
/// sequence is compiled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "response_type", content = "response", rename_all = "snake_case")]
pub enum ResponseDirective {
    /// A text block; opens a new compiled response entry.
    Text(String),
    /// Image URL attached to the preceding text block.
    Image(String),
    /// `;`-delimited button labels attached to the preceding text block.
    Button(String),
    /// `;`-delimited quick-reply labels; compiled like buttons.
    QuickReply(String),
}

impl ResponseDirective {
    /// Kind tag, for diagnostics.
    pub fn kind(&self) -> DirectiveKind {
        match self {
            ResponseDirective::Text(_) => DirectiveKind::Text,
            ResponseDirective::Image(_) => DirectiveKind::Image,
            ResponseDirective::Button(_) => DirectiveKind::Button,
            ResponseDirective::QuickReply(_) => DirectiveKind::QuickReply,
        }
    }

    /// Splits a `;`-delimited option payload into non-empty labels.
    pub fn split_options(raw: &str) -> Vec<&str> {
        raw.split(';').filter(|label| !label.is_empty()).collect()
    }
}

/// Kind of a response directive, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    Text,
    Image,
    Button,
    QuickReply,
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DirectiveKind::Text => "text",
            DirectiveKind::Image => "image",
            DirectiveKind::Button => "button",
            DirectiveKind::QuickReply => "quick_reply",
        };
        write!(f, "{}", s)
    }
}
