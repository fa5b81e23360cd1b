use crate::Result;

/// Destination for log lines
pub trait LogSink: Send + Sync {
    fn write(&self, message: &str) -> Result<()>;

    fn write_error(&self, error: &dyn std::error::Error) -> Result<()> {
        self.write(&format!("ERROR: {}", error))
    }
}
