use crate::domain::{ExerciseId, NavigationOutcome};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Events emitted by the session after command execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActivityEvent {
    /// Command ran, current exercise keeps running
    Continued { command: String },

    /// The runtime must switch to another exercise
    TransitionRequested {
        exercise_id: ExerciseId,
        params: Map<String, Value>,
    },

    /// Activity is over
    ActivityTerminated,

    /// A generated exercise for these params was the one played last
    GeneratedExercisePlayed { exercise_id: ExerciseId },

    /// Attempt recorded
    AttemptRecorded { exercise_id: ExerciseId, grade: i64 },

    /// Activity grade stored
    ActivityGraded { grade: u8 },

    /// Command failed
    CommandFailed { command: String, reason: String },
}

impl ActivityEvent {
    pub(crate) fn from_outcome(command: &str, outcome: NavigationOutcome) -> Self {
        match outcome {
            NavigationOutcome::Continue => ActivityEvent::Continued {
                command: command.to_string(),
            },
            NavigationOutcome::RequestTransition {
                exercise_id,
                params,
            } => ActivityEvent::TransitionRequested {
                exercise_id,
                params,
            },
            NavigationOutcome::Terminate => ActivityEvent::ActivityTerminated,
        }
    }

    /// Nothing queued after this event may run
    pub fn stops_execution(&self) -> bool {
        matches!(
            self,
            ActivityEvent::TransitionRequested { .. } | ActivityEvent::ActivityTerminated
        )
    }
}
