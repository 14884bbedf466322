//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports:
//! segmentation runs, review validation/archival, and training runs.

pub mod handlers;

pub use handlers::{
    ArchiveReviewItemCommand, ArchiveReviewItemHandler,
    SegmentDialogueHandler, SegmentDialogueResult,
    TrainBotHandler, TrainingError, TrainingOutcome,
    ValidateReviewItemCommand, ValidateReviewItemHandler, ValidateReviewItemResult,
};
