use crate::domain::{ExerciseId, NavigationError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Free-form values kept for the whole activity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct SavedVariables(Map<String, Value>);

impl SavedVariables {
    pub fn new(values: Map<String, Value>) -> Self {
        Self(values)
    }

    pub fn load(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Stored value, or `default` when nothing was saved under `name`
    pub fn load_or(&self, name: &str, default: Value) -> Value {
        self.0.get(name).cloned().unwrap_or(default)
    }

    pub fn save(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn load_all(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// Variables of every exercise, only available when the activity enables them
///
/// An absent or empty store counts as disabled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ExerciseVariables(Option<BTreeMap<ExerciseId, Map<String, Value>>>);

impl ExerciseVariables {
    pub fn enabled(values: BTreeMap<ExerciseId, Map<String, Value>>) -> Self {
        Self(Some(values))
    }

    pub fn disabled() -> Self {
        Self(None)
    }

    pub fn is_enabled(&self) -> bool {
        self.0.as_ref().is_some_and(|v| !v.is_empty())
    }

    fn check_enabled(&self) -> Result<&BTreeMap<ExerciseId, Map<String, Value>>, NavigationError> {
        match &self.0 {
            Some(values) if !values.is_empty() => Ok(values),
            _ => Err(NavigationError::ExerciseVariablesNotEnabled),
        }
    }

    /// All variables of `exercise_id`; the exercise must be known
    pub fn all_variables(&self, exercise_id: &str) -> Result<&Map<String, Value>, NavigationError> {
        self.check_enabled()?
            .get(exercise_id)
            .ok_or_else(|| NavigationError::UnknownExercise(exercise_id.to_string()))
    }

    pub fn variable(&self, exercise_id: &str, name: &str) -> Result<Option<&Value>, NavigationError> {
        Ok(self.all_variables(exercise_id)?.get(name))
    }

    pub fn into_inner(self) -> Option<BTreeMap<ExerciseId, Map<String, Value>>> {
        self.0
    }
}
