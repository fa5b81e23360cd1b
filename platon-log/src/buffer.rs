use crate::{LogSink, Result};
use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

/// In-memory log shared between threads
///
/// Clones share the same storage. The lock is only held while pushing or
/// copying entries.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<Vec<String>>>,
}

static GLOBAL: OnceLock<LogBuffer> = OnceLock::new();

/// Process-wide buffer
pub fn global() -> &'static LogBuffer {
    GLOBAL.get_or_init(LogBuffer::new)
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        // Entries are pushed whole, a poisoned lock is still consistent
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn log(&self, message: impl Into<String>) {
        let message = message.into();
        self.lock().push(message);
    }

    pub fn log_error(&self, error: &dyn std::error::Error) {
        let entry = format!(
            "[{}] ERROR: {}",
            Utc::now().format(crate::DEFAULT_TIMESTAMP_FORMAT),
            error
        );
        self.lock().push(entry);
    }

    /// Copy of every entry, oldest first
    pub fn logs(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn count(&self) -> usize {
        self.lock().len()
    }
}

impl LogSink for LogBuffer {
    fn write(&self, message: &str) -> Result<()> {
        self.log(message);
        Ok(())
    }

    fn write_error(&self, error: &dyn std::error::Error) -> Result<()> {
        self.log_error(error);
        Ok(())
    }
}

/// Log to the global buffer, arguments joined by spaces
///
/// ```
/// platon_log::platon_log!("grade", 80, "for", "ex1");
/// assert!(platon_log::global().logs().contains(&"grade 80 for ex1".to_string()));
/// ```
#[macro_export]
macro_rules! platon_log {
    ($($arg:expr),+ $(,)?) => {
        $crate::global().log(
            [$(::std::format!("{}", $arg)),+].join(" ")
        )
    };
}
