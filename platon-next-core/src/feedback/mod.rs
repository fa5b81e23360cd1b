//! Foldable feedback blocks returned to the learner

mod content;
mod entry;

pub use content::{truncate_field, FoldableFeedback, DEFAULT_MAX_LENGTH};
pub use entry::{
    CategoryUpdate, FeedbackCategory, FeedbackEntry, FeedbackItem, FeedbackType, FeedbackUpdate,
};
