use crate::application::runtime::{CommandQueue, QueueError};
use crate::application::{ActivityEvent, ActivityEventLoop, NavigationCommand};
use crate::config::SessionConfig;
use crate::domain::ActivitySession;

/// Activity loop - processes queued commands in batches
///
/// A transition or termination ends the current exercise: the commands still
/// queued behind it are dropped and later submissions are rejected.
pub struct ActivityLoop {
    /// Stateful event loop (owns the session)
    event_loop: ActivityEventLoop,

    /// Inbound command queue
    inbound: CommandQueue,

    /// Outbound event queue (caller drains this)
    outbound: Vec<ActivityEvent>,

    /// Max commands to process per poll
    batch_size: usize,
}

impl ActivityLoop {
    pub fn new(session: ActivitySession, config: &SessionConfig) -> Self {
        let session = match config.seed {
            Some(seed) => session.with_seed(seed),
            None => session,
        };

        Self {
            event_loop: ActivityEventLoop::new(session),
            inbound: CommandQueue::new(config.max_queue_size),
            outbound: Vec::new(),
            batch_size: config.batch_size,
        }
    }

    /// Submit a command (non-blocking)
    ///
    /// Fails with `QueueError::Closed` once the exercise ended.
    pub fn submit(&mut self, cmd: NavigationCommand) -> Result<(), QueueError> {
        self.inbound.push(cmd)
    }

    /// Process up to `batch_size` commands
    /// Returns number of commands processed
    pub fn poll(&mut self) -> usize {
        let mut processed = 0;

        while processed < self.batch_size && !self.inbound.is_closed() {
            match self.inbound.pop() {
                Some(cmd) => {
                    let event = self.event_loop.handle_command(cmd);
                    processed += 1;

                    if event.stops_execution() {
                        let dropped = self.inbound.close();
                        if !dropped.is_empty() {
                            tracing::debug!("Dropped {:?} after {:?}", dropped, event);
                        }
                    }
                    self.outbound.push(event);
                }
                None => break,
            }
        }

        processed
    }

    /// Poll until the queue is empty or execution stopped
    pub fn run_to_completion(&mut self) -> usize {
        let mut total = 0;
        loop {
            let processed = self.poll();
            if processed == 0 {
                return total;
            }
            total += processed;
        }
    }

    /// True once a transition or termination was emitted
    pub fn is_stopped(&self) -> bool {
        self.inbound.is_closed()
    }

    /// Drain all emitted events (caller's responsibility)
    pub fn drain_events(&mut self) -> Vec<ActivityEvent> {
        std::mem::take(&mut self.outbound)
    }

    /// Get reference to event loop (for queries)
    pub fn event_loop(&self) -> &ActivityEventLoop {
        &self.event_loop
    }

    pub fn into_session(self) -> ActivitySession {
        self.event_loop.into_session()
    }
}
