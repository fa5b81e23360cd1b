use crate::domain::{ExerciseDescriptor, NavigationError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

/// Key of the generated-exercises group in the sandbox format
pub const GENERATED_GROUP_KEY: &str = "-1";

/// Ordered bucket of exercises
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExerciseGroup {
    #[serde(default)]
    pub exercises: Vec<ExerciseDescriptor>,

    /// Group-level metadata (opaque to core)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExerciseGroup {
    pub fn new(exercises: Vec<ExerciseDescriptor>) -> Self {
        Self {
            exercises,
            extra: Map::new(),
        }
    }

    /// Build a group from bare exercise IDs
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ids.into_iter().map(ExerciseDescriptor::new).collect())
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn contains(&self, exercise_id: &str) -> bool {
        self.exercises.iter().any(|e| e.id == exercise_id)
    }
}

/// All groups of an activity
///
/// Indexed groups are contiguous from 0. Generated exercises are kept apart
/// and never counted as a group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseGroups {
    groups: Vec<ExerciseGroup>,
    generated: ExerciseGroup,
}

impl ExerciseGroups {
    /// Fails with `InvalidSnapshot` when an exercise ID appears twice
    pub fn new(groups: Vec<ExerciseGroup>) -> Result<Self, NavigationError> {
        check_unique_ids(&groups)?;
        Ok(Self {
            groups,
            generated: ExerciseGroup::default(),
        })
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Group at `group_nb`, or `InvalidGroup` when out of `[0, len)`
    pub fn get(&self, group_nb: i64) -> Result<&ExerciseGroup, NavigationError> {
        usize::try_from(group_nb)
            .ok()
            .and_then(|idx| self.groups.get(idx))
            .ok_or(NavigationError::InvalidGroup(group_nb))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExerciseGroup> {
        self.groups.iter()
    }

    /// Every indexed exercise, in group then exercise order
    pub fn exercises(&self) -> impl Iterator<Item = &ExerciseDescriptor> {
        self.groups.iter().flat_map(|g| g.exercises.iter())
    }

    /// Index of the group holding `exercise_id`
    pub fn position_of(&self, exercise_id: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.contains(exercise_id))
    }

    pub fn generated(&self) -> &ExerciseGroup {
        &self.generated
    }

    pub fn push_generated(&mut self, exercise: ExerciseDescriptor) {
        self.generated.exercises.push(exercise);
    }
}

impl TryFrom<BTreeMap<String, ExerciseGroup>> for ExerciseGroups {
    type Error = NavigationError;

    fn try_from(raw: BTreeMap<String, ExerciseGroup>) -> Result<Self, Self::Error> {
        let mut indexed = BTreeMap::new();
        let mut generated = ExerciseGroup::default();

        for (key, group) in raw {
            if key == GENERATED_GROUP_KEY {
                generated = group;
                continue;
            }

            let idx: usize = key.parse().map_err(|_| {
                NavigationError::InvalidSnapshot(format!("group key '{}' is not an index", key))
            })?;
            indexed.insert(idx, group);
        }

        // Keys must be exactly 0..n
        if let Some((&last, _)) = indexed.iter().next_back() {
            if last + 1 != indexed.len() {
                return Err(NavigationError::InvalidSnapshot(format!(
                    "group indices are not contiguous (highest {} for {} groups)",
                    last,
                    indexed.len()
                )));
            }
        }

        let groups: Vec<ExerciseGroup> = indexed.into_values().collect();
        check_unique_ids(&groups)?;

        Ok(Self { groups, generated })
    }
}

/// Exercise IDs are unique across indexed groups
fn check_unique_ids(groups: &[ExerciseGroup]) -> Result<(), NavigationError> {
    let mut seen = BTreeSet::new();
    for exercise in groups.iter().flat_map(|g| g.exercises.iter()) {
        if !seen.insert(exercise.id.as_str()) {
            return Err(NavigationError::InvalidSnapshot(format!(
                "exercise '{}' appears more than once",
                exercise.id
            )));
        }
    }
    Ok(())
}

impl From<ExerciseGroups> for BTreeMap<String, ExerciseGroup> {
    fn from(groups: ExerciseGroups) -> Self {
        let mut raw: BTreeMap<String, ExerciseGroup> = groups
            .groups
            .into_iter()
            .enumerate()
            .map(|(idx, group)| (idx.to_string(), group))
            .collect();

        if !groups.generated.is_empty() {
            raw.insert(GENERATED_GROUP_KEY.to_string(), groups.generated);
        }

        raw
    }
}
