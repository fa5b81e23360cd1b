//! Logging shims for exercise code running inside the sandbox
//!
//! [`FileLog`] appends to a text file, [`LogBuffer`] collects lines in memory
//! for the platform console and [`BufferLayer`] bridges `tracing` events into
//! either of them.

mod buffer;
mod error;
mod file_log;
mod last_message;
mod layer;
mod sink;

pub use buffer::{global, LogBuffer};
pub use error::{LogError, Result};
pub use file_log::{FileLog, DEFAULT_LOG_PATH, DEFAULT_TIMESTAMP_FORMAT};
pub use last_message::LastMessage;
pub use layer::BufferLayer;
pub use sink::LogSink;
