//! Review queue domain module.
//!
//! Dialogue turns that contain user or bot content are materialized as review
//! items, which curators validate into knowledge or archive. The segmenter in
//! this module is the only producer of review items.

mod item;
mod segmenter;
mod status;

pub use item::{BotResponse, ReviewItem};
pub use segmenter::{segment, VERIFY_CONFIDENCE_THRESHOLD};
pub use status::ReviewStatus;
