use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Exercise ID (unique across all groups of an activity)
pub type ExerciseId = String;

/// Exercise as listed in a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExerciseDescriptor {
    /// Unique ID
    pub id: ExerciseId,

    /// Whatever else the sandbox attached to the exercise (opaque to core)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExerciseDescriptor {
    pub fn new(id: impl Into<ExerciseId>) -> Self {
        Self {
            id: id.into(),
            extra: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Per-exercise attempt history
///
/// `attempts == 0` means the exercise has never been played, in which case
/// `grades` is empty too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExerciseMeta {
    #[serde(default)]
    pub attempts: u32,

    /// Append-only, most recent last
    #[serde(default)]
    pub grades: Vec<i64>,
}

impl ExerciseMeta {
    pub fn is_played(&self) -> bool {
        self.attempts > 0
    }

    pub fn last_grade(&self) -> Option<i64> {
        self.grades.last().copied()
    }

    pub fn best_grade(&self) -> Option<i64> {
        self.grades.iter().copied().max()
    }

    /// Count one more attempt and keep its grade
    pub fn record_attempt(&mut self, grade: i64) {
        self.attempts += 1;
        self.grades.push(grade);
    }
}
