use cucumber::World;
use platon_log::{FileLog, LogBuffer};
use platon_next_core::{
    ActivityEvent, ActivityEventLoop, ActivitySession, ActivitySnapshot, ExerciseGroup,
    FoldableFeedback, NavigationCommand,
};

#[derive(Debug, World, Default)]
pub struct ActivityWorld {
    /// Event loop around the activity (the system under test)
    pub event_loop: Option<ActivityEventLoop>,

    /// Last command executed (for debugging)
    pub last_command: Option<NavigationCommand>,

    /// Last event emitted (for assertions)
    pub last_event: Option<ActivityEvent>,

    /// Events drained from an activity loop
    pub loop_events: Vec<ActivityEvent>,

    /// Reason of the last `CommandFailed`
    pub last_error: Option<String>,

    /// Last snapshot handed back to the sandbox
    pub snapshot: Option<ActivitySnapshot>,

    /// Hashes computed by the generation steps
    pub hashes: Vec<String>,

    pub feedback: FoldableFeedback,

    pub log_buffer: LogBuffer,

    /// File log and the directory keeping it alive
    pub file_log: Option<(tempfile::TempDir, FileLog)>,
}

impl ActivityWorld {
    /// Build a fresh activity from `"a,b | c"`: groups split on `|`, IDs on `,`
    pub fn start(&mut self, layout: &str) {
        let groups = layout
            .split('|')
            .map(|group| {
                ExerciseGroup::from_ids(
                    group
                        .split(',')
                        .map(str::trim)
                        .filter(|id| !id.is_empty()),
                )
            })
            .collect();

        let session = ActivitySession::new(groups)
            .expect("Activity layout should be valid")
            .with_seed(42);
        self.event_loop = Some(ActivityEventLoop::new(session));
    }

    pub fn session(&self) -> &ActivitySession {
        self.event_loop
            .as_ref()
            .expect("No activity started")
            .session()
    }

    pub fn session_mut(&mut self) -> &mut ActivitySession {
        self.event_loop
            .as_mut()
            .expect("No activity started")
            .session_mut()
    }

    /// Replace the activity (e.g. after a snapshot round trip)
    pub fn replace_session(&mut self, session: ActivitySession) {
        self.event_loop = Some(ActivityEventLoop::new(session));
    }

    /// Take the activity out, e.g. to hand it to an `ActivityLoop`
    pub fn take_session(&mut self) -> ActivitySession {
        self.event_loop
            .take()
            .expect("No activity started")
            .into_session()
    }

    /// Execute a command and store the result
    pub fn execute(&mut self, command: NavigationCommand) -> &ActivityEvent {
        self.last_command = Some(command.clone());
        let event = self
            .event_loop
            .as_mut()
            .expect("No activity started")
            .handle_command(command);

        // Extract error if CommandFailed
        if let ActivityEvent::CommandFailed { reason, .. } = &event {
            self.last_error = Some(reason.clone());
        }

        self.last_event.insert(event)
    }

    /// Get the last event (panics if none)
    pub fn last_event(&self) -> &ActivityEvent {
        self.last_event.as_ref().expect("No event executed yet")
    }

    pub fn last_command_failed(&self) -> bool {
        matches!(self.last_event, Some(ActivityEvent::CommandFailed { .. }))
    }

    pub fn last_error_message(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn file_log(&self) -> &FileLog {
        &self.file_log.as_ref().expect("No file log created").1
    }
}
