use crate::domain::ExerciseId;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Most recently played exercise, as reported by the sandbox
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CurrentExercise {
    pub id: ExerciseId,

    #[serde(default)]
    pub grade: Option<i64>,
}

/// Navigation state of the activity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NavigationState {
    /// Absent until an exercise has been played
    #[serde(default, deserialize_with = "deserialize_current")]
    pub current: Option<CurrentExercise>,

    /// Once true the activity is over
    #[serde(default)]
    pub terminated: bool,
}

/// The sandbox writes `{}` for "no current exercise"
fn deserialize_current<'de, D>(deserializer: D) -> Result<Option<CurrentExercise>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) if map.is_empty() => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// What the hosting runtime must do after a navigation command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type")]
pub enum NavigationOutcome {
    /// Keep running the current exercise
    Continue,

    /// Stop the current exercise and switch to `exercise_id`
    RequestTransition {
        exercise_id: ExerciseId,
        #[serde(default)]
        params: Map<String, Value>,
    },

    /// Stop the current exercise and end the activity
    Terminate,
}

impl NavigationOutcome {
    /// True for both transitions and termination
    pub fn stops_execution(&self) -> bool {
        !matches!(self, NavigationOutcome::Continue)
    }

    pub fn exercise_id(&self) -> Option<&str> {
        match self {
            NavigationOutcome::RequestTransition { exercise_id, .. } => Some(exercise_id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_current_is_none() {
        let state: NavigationState =
            serde_json::from_value(serde_json::json!({"current": {}, "terminated": false}))
                .unwrap();

        assert_eq!(state.current, None);
        assert!(!state.terminated);
    }

    #[test]
    fn test_current_with_grade() {
        let state: NavigationState =
            serde_json::from_value(serde_json::json!({"current": {"id": "ex3", "grade": 75}}))
                .unwrap();

        assert_eq!(
            state.current,
            Some(CurrentExercise {
                id: "ex3".to_string(),
                grade: Some(75)
            })
        );
    }

    #[test]
    fn test_outcome_tagging() {
        let outcome = NavigationOutcome::RequestTransition {
            exercise_id: "ex1".to_string(),
            params: Map::new(),
        };

        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["type"], "RequestTransition");
        assert_eq!(json["exercise_id"], "ex1");
        assert!(outcome.stops_execution());
        assert!(!NavigationOutcome::Continue.stops_execution());
        assert!(NavigationOutcome::Terminate.stops_execution());
    }
}
