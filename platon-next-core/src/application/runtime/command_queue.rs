use crate::application::NavigationCommand;
use std::collections::VecDeque;

/// Bounded FIFO of navigation commands for the running exercise
///
/// Once the exercise ends (transition or termination) the queue is closed:
/// pending commands are dropped and new ones rejected.
#[derive(Debug)]
pub struct CommandQueue {
    pending: VecDeque<NavigationCommand>,
    max_size: usize,
    closed: bool,
}

impl CommandQueue {
    pub fn new(max_size: usize) -> Self {
        Self {
            pending: VecDeque::with_capacity(max_size),
            max_size,
            closed: false,
        }
    }

    pub fn push(&mut self, cmd: NavigationCommand) -> Result<(), QueueError> {
        if self.closed {
            return Err(QueueError::Closed {
                command: cmd.name().to_string(),
            });
        }
        if self.pending.len() >= self.max_size {
            return Err(QueueError::Full { max: self.max_size });
        }
        self.pending.push_back(cmd);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<NavigationCommand> {
        self.pending.pop_front()
    }

    /// Stop accepting commands; returns the names of the dropped ones
    pub fn close(&mut self) -> Vec<&'static str> {
        self.closed = true;
        self.pending.drain(..).map(|cmd| cmd.name()).collect()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum QueueError {
    #[error("Queue is full (max size: {max})")]
    Full { max: usize },

    #[error("Exercise already ended, {command} was not queued")]
    Closed { command: String },
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_QUEUE_SIZE)
    }
}
