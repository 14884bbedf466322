//! Command handlers.

mod archive_review_item;
mod segment_dialogue;
mod train_bot;
mod validate_review_item;

pub use archive_review_item::{ArchiveReviewItemCommand, ArchiveReviewItemHandler};
pub use segment_dialogue::{SegmentDialogueHandler, SegmentDialogueResult};
pub use train_bot::{TrainBotHandler, TrainingError, TrainingOutcome};
pub use validate_review_item::{
    ValidateReviewItemCommand, ValidateReviewItemHandler, ValidateReviewItemResult,
};
