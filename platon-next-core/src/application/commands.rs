use crate::domain::{ExerciseId, GradeStrategy};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Commands that can be executed on an activity session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum NavigationCommand {
    /// Switch to an exercise
    PlayExercise {
        exercise_id: ExerciseId,
        #[serde(default)]
        params: Option<Map<String, Value>>,
    },

    /// Switch to an exercise unless it already got an attempt
    PlayIfUnplayed {
        exercise_id: ExerciseId,
        #[serde(default)]
        params: Option<Map<String, Value>>,
    },

    /// Replay the previous exercise if it has no attempt
    PlayPreviousIfUnplayed,

    /// Random exercise of the group unless one was already attempted
    PlayAnyFromGroup { group_nb: i64 },

    /// Next unplayed exercise of the group
    PlayAllFromGroup {
        group_nb: i64,
        #[serde(default)]
        random_order: bool,
    },

    PlayFirstUnplayed,

    PlayNextUnplayed {
        #[serde(default)]
        wrap: bool,
    },

    /// Generate an exercise from a template, once per distinct params
    GenerateAndPlay {
        exercise_id: ExerciseId,
        #[serde(default)]
        params: Option<Map<String, Value>>,
    },

    /// Record an attempt reported by the platform
    RecordAttempt { exercise_id: ExerciseId, grade: i64 },

    SetActivityGrade { strategy: GradeStrategy },

    StopActivity,
}

impl NavigationCommand {
    /// Command name used in `CommandFailed` events and logs
    pub fn name(&self) -> &'static str {
        match self {
            NavigationCommand::PlayExercise { .. } => "PlayExercise",
            NavigationCommand::PlayIfUnplayed { .. } => "PlayIfUnplayed",
            NavigationCommand::PlayPreviousIfUnplayed => "PlayPreviousIfUnplayed",
            NavigationCommand::PlayAnyFromGroup { .. } => "PlayAnyFromGroup",
            NavigationCommand::PlayAllFromGroup { .. } => "PlayAllFromGroup",
            NavigationCommand::PlayFirstUnplayed => "PlayFirstUnplayed",
            NavigationCommand::PlayNextUnplayed { .. } => "PlayNextUnplayed",
            NavigationCommand::GenerateAndPlay { .. } => "GenerateAndPlay",
            NavigationCommand::RecordAttempt { .. } => "RecordAttempt",
            NavigationCommand::SetActivityGrade { .. } => "SetActivityGrade",
            NavigationCommand::StopActivity => "StopActivity",
        }
    }
}
