use crate::domain::{
    ActivitySnapshot, CurrentExercise, ExerciseGroup, ExerciseGroups, ExerciseId, ExerciseMeta,
    ExerciseVariables, NavigationError, NavigationOutcome, NavigationState, SavedVariables,
};
use crate::traits::GradeAggregator;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

type Result<T> = std::result::Result<T, NavigationError>;

/// Activity aggregate root
///
/// Owns the state the sandbox hands over for one activity attempt. Built from
/// an `ActivitySnapshot` (or fresh) and turned back into one when the attempt
/// ends.
#[derive(Debug, Clone)]
pub struct ActivitySession {
    pub(crate) groups: ExerciseGroups,

    pub(crate) exercises_meta: BTreeMap<ExerciseId, ExerciseMeta>,

    pub(crate) navigation: NavigationState,

    pub(crate) saved_variables: SavedVariables,

    pub(crate) exercise_variables: ExerciseVariables,

    /// Params hash -> generated exercise ID
    pub(crate) generated_exercises: BTreeMap<String, ExerciseId>,

    pub(crate) activity_grade: Option<u8>,

    /// Pending transition (what the runtime should switch to)
    pub(crate) next_exercise_id: Option<ExerciseId>,
    pub(crate) next_exercise_params: Option<Map<String, Value>>,

    rng: StdRng,
}

impl ActivitySession {
    /// Fresh activity: every exercise known and unplayed
    ///
    /// Fails with `InvalidSnapshot` when an exercise ID is listed twice.
    pub fn new(groups: Vec<ExerciseGroup>) -> Result<Self> {
        let groups = ExerciseGroups::new(groups)?;
        let exercises_meta = groups
            .exercises()
            .map(|e| (e.id.clone(), ExerciseMeta::default()))
            .collect();

        Ok(Self {
            groups,
            exercises_meta,
            navigation: NavigationState::default(),
            saved_variables: SavedVariables::default(),
            exercise_variables: ExerciseVariables::default(),
            generated_exercises: BTreeMap::new(),
            activity_grade: None,
            next_exercise_id: None,
            next_exercise_params: None,
            rng: StdRng::from_entropy(),
        })
    }

    /// Restore an activity from the sandbox state
    pub fn from_snapshot(snapshot: ActivitySnapshot) -> Result<Self> {
        let groups = ExerciseGroups::try_from(snapshot.exercise_groups)?;

        if let Some(grade) = snapshot.activity_grade.filter(|g| *g > 100) {
            return Err(NavigationError::InvalidActivityGrade(grade.into()));
        }

        Ok(Self {
            groups,
            exercises_meta: snapshot.exercises_meta,
            navigation: snapshot.navigation,
            saved_variables: snapshot.saved_variables,
            exercise_variables: snapshot.exercises_variables,
            generated_exercises: snapshot.generated_exercises,
            activity_grade: snapshot.activity_grade,
            next_exercise_id: snapshot.next_exercise_id,
            next_exercise_params: snapshot.next_exercise_params,
            rng: StdRng::from_entropy(),
        })
    }

    /// Make random selection reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_exercise_variables(mut self, variables: ExerciseVariables) -> Self {
        self.exercise_variables = variables;
        self
    }

    pub fn to_snapshot(&self) -> ActivitySnapshot {
        self.clone().into_snapshot()
    }

    /// Hand the state back to the sandbox
    pub fn into_snapshot(self) -> ActivitySnapshot {
        ActivitySnapshot {
            exercise_groups: self.groups.into(),
            exercises_meta: self.exercises_meta,
            navigation: self.navigation,
            saved_variables: self.saved_variables,
            exercises_variables: self.exercise_variables,
            generated_exercises: self.generated_exercises,
            activity_grade: self.activity_grade,
            next_exercise_id: self.next_exercise_id,
            next_exercise_params: self.next_exercise_params,
        }
    }

    // ===== Getters =====

    pub fn groups(&self) -> &ExerciseGroups {
        &self.groups
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn is_terminated(&self) -> bool {
        self.navigation.terminated
    }

    pub fn activity_grade(&self) -> Option<u8> {
        self.activity_grade
    }

    pub fn next_exercise_id(&self) -> Option<&str> {
        self.next_exercise_id.as_deref()
    }

    pub fn next_exercise_params(&self) -> Option<&Map<String, Value>> {
        self.next_exercise_params.as_ref()
    }

    pub fn exercises_meta(&self) -> &BTreeMap<ExerciseId, ExerciseMeta> {
        &self.exercises_meta
    }

    fn meta(&self, exercise_id: &str) -> Result<&ExerciseMeta> {
        self.exercises_meta
            .get(exercise_id)
            .ok_or_else(|| NavigationError::UnknownExercise(exercise_id.to_string()))
    }

    // ===== Navigation queries =====

    /// Number of indexed groups (generated exercises excluded)
    pub fn groups_count(&self) -> i64 {
        self.groups.len() as i64
    }

    pub fn group_exercises_count(&self, group_nb: i64) -> Result<i64> {
        Ok(self.groups.get(group_nb)?.len() as i64)
    }

    /// ID of exercise `exercise_nb` in group `group_nb` (group validated first)
    pub fn exercise_id(&self, group_nb: i64, exercise_nb: i64) -> Result<&str> {
        let group = self.groups.get(group_nb)?;

        usize::try_from(exercise_nb)
            .ok()
            .and_then(|idx| group.exercises.get(idx))
            .map(|e| e.id.as_str())
            .ok_or(NavigationError::InvalidExercise {
                group: group_nb,
                exercise: exercise_nb,
            })
    }

    pub fn exercise_attempts(&self, exercise_id: &str) -> Result<u32> {
        Ok(self.meta(exercise_id)?.attempts)
    }

    pub fn is_played(&self, exercise_id: &str) -> Result<bool> {
        Ok(self.meta(exercise_id)?.is_played())
    }

    pub fn is_all_exercises_played(&self) -> bool {
        self.exercises_meta.values().all(ExerciseMeta::is_played)
    }

    pub fn is_one_exercise_played(&self) -> bool {
        self.exercises_meta.values().any(ExerciseMeta::is_played)
    }

    pub fn is_all_exercises_from_group_played(&self, group_nb: i64) -> Result<bool> {
        for exercise in &self.groups.get(group_nb)?.exercises {
            if !self.is_played(&exercise.id)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn is_one_exercise_from_group_played(&self, group_nb: i64) -> Result<bool> {
        for exercise in &self.groups.get(group_nb)?.exercises {
            if self.is_played(&exercise.id)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn exercise_grades(&self, exercise_id: &str) -> Result<&[i64]> {
        Ok(&self.meta(exercise_id)?.grades)
    }

    pub fn exercise_last_grade(&self, exercise_id: &str) -> Result<Option<i64>> {
        Ok(self.meta(exercise_id)?.last_grade())
    }

    pub fn exercise_best_grade(&self, exercise_id: &str) -> Result<Option<i64>> {
        Ok(self.meta(exercise_id)?.best_grade())
    }

    /// Exercise played last, if any
    pub fn previous_exercise_id(&self) -> Option<&str> {
        self.navigation.current.as_ref().map(|c| c.id.as_str())
    }

    pub fn previous_grade(&self) -> Option<i64> {
        self.navigation.current.as_ref().and_then(|c| c.grade)
    }

    /// Group holding the exercise played last
    pub fn previous_group_number(&self) -> Option<i64> {
        let previous = self.previous_exercise_id()?;
        self.groups.position_of(previous).map(|idx| idx as i64)
    }

    // ===== Random selection =====

    pub fn random_group_nb(&mut self) -> Result<i64> {
        let count = self.groups_count();
        if count == 0 {
            return Err(NavigationError::InvalidGroup(0));
        }
        Ok(self.rng.gen_range(0..count))
    }

    pub fn random_group_exercise_nb(&mut self, group_nb: i64) -> Result<i64> {
        let count = self.group_exercises_count(group_nb)?;
        if count == 0 {
            return Err(NavigationError::InvalidExercise {
                group: group_nb,
                exercise: 0,
            });
        }
        Ok(self.rng.gen_range(0..count))
    }

    pub fn random_exercise(&mut self) -> Result<ExerciseId> {
        let group_nb = self.random_group_nb()?;
        self.random_exercise_from_group(group_nb)
    }

    pub fn random_exercise_from_group(&mut self, group_nb: i64) -> Result<ExerciseId> {
        let exercise_nb = self.random_group_exercise_nb(group_nb)?;
        Ok(self.exercise_id(group_nb, exercise_nb)?.to_string())
    }

    /// Uniform pick among unplayed exercises, `None` when everything was played
    pub fn random_unplayed_exercise_id(&mut self) -> Option<ExerciseId> {
        let unplayed: Vec<&ExerciseId> = self
            .exercises_meta
            .iter()
            .filter(|(_, meta)| !meta.is_played())
            .map(|(id, _)| id)
            .collect();

        unplayed.choose(&mut self.rng).map(|id| (*id).clone())
    }

    // ===== Navigation commands =====

    /// Ask the runtime to switch to `exercise_id`
    pub fn play_exercise(
        &mut self,
        exercise_id: impl Into<ExerciseId>,
        params: Option<Map<String, Value>>,
    ) -> NavigationOutcome {
        let exercise_id = exercise_id.into();

        if self.navigation.terminated {
            tracing::debug!("Activity terminated, ignoring play of {}", exercise_id);
            return NavigationOutcome::Continue;
        }

        let params = params.unwrap_or_default();
        tracing::info!("Requesting transition to exercise {}", exercise_id);

        self.next_exercise_id = Some(exercise_id.clone());
        self.next_exercise_params = Some(params.clone());

        NavigationOutcome::RequestTransition {
            exercise_id,
            params,
        }
    }

    /// End the activity
    pub fn stop_activity(&mut self) -> NavigationOutcome {
        if self.navigation.terminated {
            return NavigationOutcome::Continue;
        }

        self.navigation.terminated = true;
        self.next_exercise_id = None;
        self.next_exercise_params = None;
        tracing::info!("Activity terminated");

        NavigationOutcome::Terminate
    }

    /// Replay the previous exercise if it never got an attempt
    pub fn play_previous_if_unplayed(&mut self) -> Result<NavigationOutcome> {
        let Some(previous) = self.previous_exercise_id().map(str::to_string) else {
            return Ok(NavigationOutcome::Continue);
        };

        if self.is_played(&previous)? {
            return Ok(NavigationOutcome::Continue);
        }

        Ok(self.play_exercise(previous, None))
    }

    pub fn play_if_unplayed(
        &mut self,
        exercise_id: &str,
        params: Option<Map<String, Value>>,
    ) -> Result<NavigationOutcome> {
        if self.is_played(exercise_id)? {
            return Ok(NavigationOutcome::Continue);
        }

        Ok(self.play_exercise(exercise_id, params))
    }

    /// Play a random exercise of the group unless one of them was already attempted
    pub fn play_any_from_group(&mut self, group_nb: i64) -> Result<NavigationOutcome> {
        if self.is_one_exercise_from_group_played(group_nb)? {
            return Ok(NavigationOutcome::Continue);
        }

        let exercise_id = self.random_exercise_from_group(group_nb)?;
        Ok(self.play_exercise(exercise_id, None))
    }

    /// Play an unplayed exercise of the group, the first one or a random one
    pub fn play_all_from_group(
        &mut self,
        group_nb: i64,
        random_order: bool,
    ) -> Result<NavigationOutcome> {
        let mut unplayed = Vec::new();
        for exercise in &self.groups.get(group_nb)?.exercises {
            if !self.is_played(&exercise.id)? {
                unplayed.push(exercise.id.clone());
            }
        }

        let chosen = if random_order {
            unplayed.choose(&mut self.rng).cloned()
        } else {
            unplayed.into_iter().next()
        };

        match chosen {
            Some(exercise_id) => Ok(self.play_exercise(exercise_id, None)),
            None => Ok(NavigationOutcome::Continue),
        }
    }

    /// Play the first unplayed exercise in group then exercise order
    pub fn play_first_unplayed_exercise(&mut self) -> Result<NavigationOutcome> {
        match self.first_unplayed_after(None)? {
            Some(exercise_id) => Ok(self.play_exercise(exercise_id, None)),
            None => Ok(NavigationOutcome::Continue),
        }
    }

    /// Play the first unplayed exercise after the previous one
    ///
    /// With `wrap` the search falls back to the first unplayed exercise of the
    /// whole activity.
    pub fn play_next_unplayed_exercise(&mut self, wrap: bool) -> Result<NavigationOutcome> {
        let mut next = match self.previous_exercise_id() {
            Some(previous) => self.first_unplayed_after(Some(previous))?,
            None => None,
        };

        if next.is_none() && wrap {
            next = self.first_unplayed_after(None)?;
        }

        match next {
            Some(exercise_id) => Ok(self.play_exercise(exercise_id, None)),
            None => Ok(NavigationOutcome::Continue),
        }
    }

    /// First unplayed exercise strictly after `after`, or from the start when `None`
    fn first_unplayed_after(&self, after: Option<&str>) -> Result<Option<ExerciseId>> {
        let mut searching = after.is_none();

        for exercise in self.groups.exercises() {
            if searching && !self.is_played(&exercise.id)? {
                return Ok(Some(exercise.id.clone()));
            }
            if after == Some(exercise.id.as_str()) {
                searching = true;
            }
        }

        Ok(None)
    }

    /// Record an attempt reported by the runtime; it becomes the previous exercise
    pub fn record_attempt(&mut self, exercise_id: &str, grade: i64) -> Result<()> {
        let meta = self
            .exercises_meta
            .get_mut(exercise_id)
            .ok_or_else(|| NavigationError::UnknownExercise(exercise_id.to_string()))?;
        meta.record_attempt(grade);

        self.navigation.current = Some(CurrentExercise {
            id: exercise_id.to_string(),
            grade: Some(grade),
        });
        self.next_exercise_id = None;
        self.next_exercise_params = None;

        tracing::debug!("Recorded attempt on {} with grade {}", exercise_id, grade);
        Ok(())
    }

    // ===== Grading =====

    /// Last grade of every played exercise
    pub fn played_last_grades(&self) -> Vec<i64> {
        self.exercises_meta
            .values()
            .filter(|meta| meta.is_played())
            .filter_map(ExerciseMeta::last_grade)
            .collect()
    }

    /// Aggregate and store the activity grade; out of `[0, 100]` keeps the old one
    pub fn set_activity_grade<A>(&mut self, strategy: &A) -> Result<u8>
    where
        A: GradeAggregator + ?Sized,
    {
        let total = strategy.aggregate(self);

        let grade = match u8::try_from(total) {
            Ok(grade) if grade <= 100 => grade,
            _ => {
                tracing::warn!("Strategy {} produced invalid grade {}", strategy.name(), total);
                return Err(NavigationError::InvalidActivityGrade(total));
            }
        };

        self.activity_grade = Some(grade);
        tracing::info!("Activity grade set to {} ({})", grade, strategy.name());

        Ok(grade)
    }

    // ===== Variables =====

    pub fn saved_variables(&self) -> &SavedVariables {
        &self.saved_variables
    }

    pub fn load(&self, name: &str) -> Option<&Value> {
        self.saved_variables.load(name)
    }

    pub fn save(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.saved_variables.save(name, value);
    }

    pub fn exercise_variable(&self, exercise_id: &str, name: &str) -> Result<Option<&Value>> {
        self.exercise_variables.variable(exercise_id, name)
    }

    pub fn exercise_all_variables(&self, exercise_id: &str) -> Result<&Map<String, Value>> {
        self.exercise_variables.all_variables(exercise_id)
    }
}
