use crate::application::{ActivityEvent, NavigationCommand};
use crate::domain::{ActivitySession, GenerationResult, NavigationError, NavigationOutcome};

/// Event loop that runs commands against one activity session
#[derive(Debug, Clone)]
pub struct ActivityEventLoop {
    session: ActivitySession,
}

impl ActivityEventLoop {
    pub fn new(session: ActivitySession) -> Self {
        Self { session }
    }

    /// Process a single command and return the resulting event
    pub fn handle_command(&mut self, command: NavigationCommand) -> ActivityEvent {
        let name = command.name();

        let result = match command {
            NavigationCommand::PlayExercise {
                exercise_id,
                params,
            } => Ok(self.session.play_exercise(exercise_id, params)),

            NavigationCommand::PlayIfUnplayed {
                exercise_id,
                params,
            } => self.session.play_if_unplayed(&exercise_id, params),

            NavigationCommand::PlayPreviousIfUnplayed => self.session.play_previous_if_unplayed(),

            NavigationCommand::PlayAnyFromGroup { group_nb } => {
                self.session.play_any_from_group(group_nb)
            }

            NavigationCommand::PlayAllFromGroup {
                group_nb,
                random_order,
            } => self.session.play_all_from_group(group_nb, random_order),

            NavigationCommand::PlayFirstUnplayed => self.session.play_first_unplayed_exercise(),

            NavigationCommand::PlayNextUnplayed { wrap } => {
                self.session.play_next_unplayed_exercise(wrap)
            }

            NavigationCommand::GenerateAndPlay {
                exercise_id,
                params,
            } => return self.handle_generate(name, &exercise_id, params),

            NavigationCommand::RecordAttempt { exercise_id, grade } => {
                return match self.session.record_attempt(&exercise_id, grade) {
                    Ok(()) => ActivityEvent::AttemptRecorded { exercise_id, grade },
                    Err(e) => Self::failed(name, e),
                };
            }

            NavigationCommand::SetActivityGrade { strategy } => {
                return match self.session.set_activity_grade(&strategy) {
                    Ok(grade) => ActivityEvent::ActivityGraded { grade },
                    Err(e) => Self::failed(name, e),
                };
            }

            NavigationCommand::StopActivity => Ok(self.session.stop_activity()),
        };

        match result {
            Ok(outcome) => ActivityEvent::from_outcome(name, outcome),
            Err(e) => Self::failed(name, e),
        }
    }

    fn handle_generate(
        &mut self,
        name: &str,
        exercise_id: &str,
        params: Option<serde_json::Map<String, serde_json::Value>>,
    ) -> ActivityEvent {
        match self.session.generate_and_play_exercise(exercise_id, params) {
            GenerationResult::Transition(outcome) => ActivityEvent::from_outcome(name, outcome),
            GenerationResult::Played(exercise_id) => {
                ActivityEvent::GeneratedExercisePlayed { exercise_id }
            }
            GenerationResult::Absent => ActivityEvent::from_outcome(name, NavigationOutcome::Continue),
        }
    }

    fn failed(command: &str, error: NavigationError) -> ActivityEvent {
        tracing::warn!("{} failed: {}", command, error);
        ActivityEvent::CommandFailed {
            command: command.to_string(),
            reason: error.to_string(),
        }
    }

    pub fn session(&self) -> &ActivitySession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut ActivitySession {
        &mut self.session
    }

    pub fn into_session(self) -> ActivitySession {
        self.session
    }
}
