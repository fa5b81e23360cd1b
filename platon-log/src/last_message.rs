use crate::{LogSink, Result};
use std::sync::Mutex;

/// Sink that only remembers the most recent message
#[derive(Debug, Default)]
pub struct LastMessage {
    message: Mutex<Option<String>>,
}

impl LastMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self, message: impl Into<String>) {
        let message = message.into();
        *self
            .message
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(message);
    }

    pub fn last(&self) -> Option<String> {
        self.message
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl LogSink for LastMessage {
    fn write(&self, message: &str) -> Result<()> {
        self.log(message);
        Ok(())
    }
}
