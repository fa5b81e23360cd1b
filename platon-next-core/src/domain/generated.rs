use crate::domain::{ActivitySession, ExerciseDescriptor, ExerciseId, NavigationOutcome};
use serde_json::{Map, Value};

/// Key under which the exercise ID is merged into the hashed params
pub const EXERCISE_ID_KEY: &str = "exerciseId";

/// Dedup key of a generated exercise
///
/// MD5 hex digest of the params merged with `exercise_id`, serialized with
/// recursively sorted keys so that key order never changes the hash. Not a
/// security primitive.
pub fn hash_params(params: &Map<String, Value>, exercise_id: &str) -> String {
    let mut merged = params.clone();
    merged.insert(EXERCISE_ID_KEY.to_string(), Value::from(exercise_id));

    let canonical = canonicalize(&Value::Object(merged));
    format!("{:x}", md5::compute(canonical.to_string()))
}

/// Rebuild objects with keys inserted in sorted order
fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();

            let mut sorted = Map::new();
            for key in keys {
                sorted.insert(key.clone(), canonicalize(&map[key.as_str()]));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}

/// Result of `ActivitySession::generate_and_play_exercise`
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationResult {
    /// First request for these params: the template is played with them
    Transition(NavigationOutcome),

    /// The exercise registered for these params was the one played last
    Played(ExerciseId),

    /// Already generated but not the one played last, or activity terminated
    Absent,
}

impl ActivitySession {
    /// Generate an exercise from a template once per distinct params
    pub fn generate_and_play_exercise(
        &mut self,
        exercise_id: &str,
        params: Option<Map<String, Value>>,
    ) -> GenerationResult {
        if self.navigation.terminated {
            return GenerationResult::Absent;
        }

        let params = params.unwrap_or_default();
        let hash = hash_params(&params, exercise_id);

        match self.generated_exercises.get(&hash) {
            None => {
                tracing::info!("Generating exercise {} (hash {})", exercise_id, hash);

                self.groups.push_generated(
                    ExerciseDescriptor::new(exercise_id)
                        .with_field("params", Value::Object(params.clone()))
                        .with_field("hash", hash.clone()),
                );
                self.exercises_meta
                    .entry(exercise_id.to_string())
                    .or_default();
                self.generated_exercises
                    .insert(hash, exercise_id.to_string());

                GenerationResult::Transition(self.play_exercise(exercise_id, Some(params)))
            }
            Some(generated_id) if self.previous_exercise_id() == Some(generated_id.as_str()) => {
                GenerationResult::Played(generated_id.clone())
            }
            Some(_) => GenerationResult::Absent,
        }
    }

    /// Params hash -> generated exercise ID
    pub fn generated_exercises(&self) -> &std::collections::BTreeMap<String, ExerciseId> {
        &self.generated_exercises
    }
}
