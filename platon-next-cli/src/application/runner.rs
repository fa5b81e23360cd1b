use crate::infrastructure::{CliError, Result, StateStore};
use platon_next_core::{
    ActivityEvent, ActivityLoop, ActivitySession, CurrentExercise, ExerciseGroup,
    NavigationCommand, SessionConfig,
};
use serde::Serialize;
use serde_json::{Map, Value};

/// Summary printed by `platon-next status`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityStatus {
    pub groups: i64,
    pub exercises: usize,
    pub played: usize,
    pub all_played: bool,
    pub current: Option<CurrentExercise>,
    pub terminated: bool,
    pub activity_grade: Option<u8>,
    pub next_exercise_id: Option<String>,
}

impl From<&ActivitySession> for ActivityStatus {
    fn from(session: &ActivitySession) -> Self {
        let meta = session.exercises_meta();
        Self {
            groups: session.groups_count(),
            exercises: meta.len(),
            played: meta.values().filter(|m| m.is_played()).count(),
            all_played: session.is_all_exercises_played(),
            current: session.navigation().current.clone(),
            terminated: session.is_terminated(),
            activity_grade: session.activity_grade(),
            next_exercise_id: session.next_exercise_id().map(str::to_string),
        }
    }
}

/// Runs one command per invocation against the stored activity
pub struct ActivityRunner {
    store: StateStore,
    config: SessionConfig,
}

impl ActivityRunner {
    pub fn new(store: StateStore, config: SessionConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Fresh activity from exercise IDs, one list per group
    pub fn init(&self, groups: Vec<Vec<String>>) -> Result<ActivityStatus> {
        if groups.is_empty() {
            return Err(CliError::InvalidConfig(
                "an activity needs at least one group".to_string(),
            ));
        }

        let session =
            ActivitySession::new(groups.into_iter().map(ExerciseGroup::from_ids).collect())?;
        self.store.create(&session)?;

        tracing::info!("Created activity at {}", self.store.path().display());
        Ok(ActivityStatus::from(&session))
    }

    pub fn status(&self) -> Result<ActivityStatus> {
        let session = self.store.load()?;
        Ok(ActivityStatus::from(&session))
    }

    /// Load, run `command`, and save unless it failed
    pub fn execute(&self, command: NavigationCommand) -> Result<ActivityEvent> {
        let session = self.store.load()?;
        let name = command.name();

        let mut activity = ActivityLoop::new(session, &self.config);
        activity.submit(command)?;
        activity.run_to_completion();

        let event = activity
            .drain_events()
            .into_iter()
            .next()
            .ok_or_else(|| CliError::CommandFailed {
                command: name.to_string(),
                reason: "no event emitted".to_string(),
            })?;

        if let ActivityEvent::CommandFailed { command, reason } = event {
            return Err(CliError::CommandFailed { command, reason });
        }

        self.store.save(&activity.into_session())?;
        Ok(event)
    }
}

/// Parse `--params`, which must be a JSON object
pub fn parse_params(raw: Option<&str>) -> Result<Option<Map<String, Value>>> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(Some(map)),
        other => Err(CliError::InvalidParams(format!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}
