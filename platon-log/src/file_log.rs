use crate::{LogError, LogSink, Result};
use chrono::Utc;
use std::fmt::Debug;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_PATH: &str = ".log";
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only text log, one line per message
#[derive(Debug, Clone)]
pub struct FileLog {
    path: PathBuf,
    include_timestamp: bool,
    timestamp_format: String,
}

impl Default for FileLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_PATH)
    }
}

impl FileLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            include_timestamp: true,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    pub fn without_timestamp(mut self) -> Self {
        self.include_timestamp = false;
        self
    }

    /// strftime-style format, rendered in UTC
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `message`, creating the file if needed
    pub fn log(&self, message: &str) -> Result<()> {
        let line = if self.include_timestamp {
            format!(
                "[{}] {}\n",
                Utc::now().format(&self.timestamp_format),
                message
            )
        } else {
            format!("{}\n", message)
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LogError::inaccessible(&self.path, e))?;

        file.write_all(line.as_bytes())
            .map_err(|e| LogError::inaccessible(&self.path, e))
    }

    /// Log an error and its whole source chain
    pub fn log_error(&self, error: &dyn std::error::Error, context: &str) -> Result<()> {
        let mut message = if context.is_empty() {
            format!("EXCEPTION - {}", error)
        } else {
            format!("EXCEPTION - {}: {}", context, error)
        };

        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }

        self.log(&message)
    }

    pub fn log_debug<T: Debug + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        self.log(&format!("DEBUG - {} = {:?}", name, value))
    }

    /// Truncate the file; a missing file is left missing
    pub fn clear(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }

        fs::write(&self.path, "").map_err(|e| LogError::inaccessible(&self.path, e))
    }

    /// Whole file, `None` when nothing was logged yet
    pub fn contents(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LogError::inaccessible(&self.path, e)),
        }
    }
}

impl LogSink for FileLog {
    fn write(&self, message: &str) -> Result<()> {
        self.log(message)
    }

    fn write_error(&self, error: &dyn std::error::Error) -> Result<()> {
        self.log_error(error, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(Debug, thiserror::Error)]
    #[error("outer failure")]
    struct Outer {
        #[source]
        inner: std::io::Error,
    }

    fn log_in(dir: &TempDir) -> FileLog {
        FileLog::new(dir.path().join("activity.log"))
    }

    #[test]
    fn test_log_creates_file() {
        let dir = TempDir::new().unwrap();
        let log = log_in(&dir);

        assert_eq!(log.contents().unwrap(), None);

        log.log("first").unwrap();
        log.log("second").unwrap();

        let contents = log.contents().unwrap().unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("] first"));
        assert!(lines[1].ends_with("] second"));
    }

    #[test]
    fn test_timestamp_format() {
        let dir = TempDir::new().unwrap();
        let log = log_in(&dir);

        log.log("stamped").unwrap();

        let contents = log.contents().unwrap().unwrap();
        // [YYYY-MM-DD HH:MM:SS] stamped
        assert_eq!(contents.find(']'), Some(20));
    }

    #[test]
    fn test_without_timestamp() {
        let dir = TempDir::new().unwrap();
        let log = log_in(&dir).without_timestamp();

        log.log_debug("grades", &vec![80, 90]).unwrap();

        assert_eq!(
            log.contents().unwrap().unwrap(),
            "DEBUG - grades = [80, 90]\n"
        );
    }

    #[test]
    fn test_log_error_chain() {
        let dir = TempDir::new().unwrap();
        let log = log_in(&dir).without_timestamp();
        let error = Outer {
            inner: std::io::Error::new(ErrorKind::Other, "disk on fire"),
        };

        log.log_error(&error, "saving grade").unwrap();

        assert_eq!(
            log.contents().unwrap().unwrap(),
            "EXCEPTION - saving grade: outer failure\n  caused by: disk on fire\n"
        );
    }

    #[test]
    fn test_clear() {
        let dir = TempDir::new().unwrap();
        let log = log_in(&dir);

        // Missing file stays missing
        log.clear().unwrap();
        assert!(!log.path().exists());

        log.log("entry").unwrap();
        log.clear().unwrap();
        assert_eq!(log.contents().unwrap(), Some(String::new()));
    }

    #[test]
    fn test_inaccessible_path() {
        let dir = TempDir::new().unwrap();
        let log = FileLog::new(dir.path().join("missing").join("activity.log"));

        let err = log.log("nope").unwrap_err();
        assert!(matches!(err, LogError::Inaccessible { .. }));
    }

    #[test]
    fn test_default_path() {
        assert_eq!(FileLog::default().path(), Path::new(".log"));
    }
}
