use crate::domain::ExerciseId;

/// Errors raised by navigation queries and commands
///
/// Stopping the current exercise is not an error, see `NavigationOutcome`.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum NavigationError {
    #[error("Invalid group number: {0}")]
    InvalidGroup(i64),

    #[error("Invalid exercise number {exercise} in group {group}")]
    InvalidExercise { group: i64, exercise: i64 },

    #[error("Exercise variables are not enabled for this activity")]
    ExerciseVariablesNotEnabled,

    #[error("Invalid activity grade {0}: must be between 0 and 100")]
    InvalidActivityGrade(i64),

    #[error("Unknown exercise: {0}")]
    UnknownExercise(ExerciseId),

    #[error("Invalid activity snapshot: {0}")]
    InvalidSnapshot(String),
}
