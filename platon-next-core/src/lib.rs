//! Exercise navigation and grading for PLaTon activities
//!
//! An [`ActivitySession`] is rebuilt from the JSON [`ActivitySnapshot`] the
//! sandbox provides, driven through navigation commands, and serialized back.
//! Commands that end the current exercise return a [`NavigationOutcome`]
//! instead of unwinding.

pub mod application;
pub mod config;
pub mod domain;
pub mod feedback;
pub mod traits;

pub use application::runtime::{ActivityLoop, CommandQueue, QueueError};
pub use application::{ActivityEvent, ActivityEventLoop, NavigationCommand};
pub use config::SessionConfig;
pub use domain::{
    hash_params, ActivitySession, ActivitySnapshot, AverageGrade, BestGrade, CurrentExercise,
    ExerciseDescriptor, ExerciseGroup, ExerciseGroups, ExerciseId, ExerciseMeta,
    ExerciseVariables, GenerationResult, GradeStrategy, NavigationError, NavigationOutcome,
    NavigationState, SavedVariables,
};
pub use feedback::{FeedbackCategory, FeedbackEntry, FeedbackItem, FeedbackType, FoldableFeedback};
pub use traits::GradeAggregator;
