pub mod error;
pub mod exercise;
pub mod generated;
pub mod grading;
pub mod group;
pub mod navigation;
pub mod session;
pub mod snapshot;
pub mod variables;

pub use error::NavigationError;
pub use exercise::{ExerciseDescriptor, ExerciseId, ExerciseMeta};
pub use generated::{hash_params, GenerationResult, EXERCISE_ID_KEY};
pub use grading::{AverageGrade, BestGrade, GradeStrategy};
pub use group::{ExerciseGroup, ExerciseGroups, GENERATED_GROUP_KEY};
pub use navigation::{CurrentExercise, NavigationOutcome, NavigationState};
pub use session::ActivitySession;
pub use snapshot::ActivitySnapshot;
pub use variables::{ExerciseVariables, SavedVariables};
