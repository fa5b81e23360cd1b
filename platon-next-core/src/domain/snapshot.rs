use crate::domain::{
    ExerciseGroup, ExerciseId, ExerciseMeta, ExerciseVariables, NavigationState, SavedVariables,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Activity state as exchanged with the sandbox
///
/// Field names follow the sandbox globals (`exerciseGroups`, `exercisesMeta`,
/// ...). Group keys are stringified indices, `"-1"` holding generated
/// exercises.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySnapshot {
    #[serde(default)]
    pub exercise_groups: BTreeMap<String, ExerciseGroup>,

    #[serde(default)]
    pub exercises_meta: BTreeMap<ExerciseId, ExerciseMeta>,

    #[serde(default)]
    pub navigation: NavigationState,

    #[serde(default)]
    pub saved_variables: SavedVariables,

    #[serde(default)]
    pub exercises_variables: ExerciseVariables,

    /// Params hash -> generated exercise ID
    #[serde(default)]
    pub generated_exercises: BTreeMap<String, ExerciseId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_grade: Option<u8>,

    /// Exercise requested by the last navigation command
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_exercise_id: Option<ExerciseId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_exercise_params: Option<Map<String, Value>>,
}

impl ActivitySnapshot {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
