use platon_log::{BufferLayer, FileLog};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Crates whose events pass the default filter
const CRATES: [&str; 3] = ["platon_next_core", "platon_next_cli", "platon_log"];

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub default_level: tracing::Level,
    pub json_format: bool,
    pub show_targets: bool,

    /// Print events on stderr (`--quiet` turns this off)
    pub show_logs: bool,

    /// Also append events to this file, one timestamped line each
    pub log_file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: tracing::Level::WARN,
            json_format: false,
            show_targets: true,
            show_logs: true,
            log_file: None,
        }
    }
}

impl LogConfig {
    pub fn with_level(mut self, level: tracing::Level) -> Self {
        self.default_level = level;
        self
    }

    /// One JSON object per event
    pub fn with_json(mut self) -> Self {
        self.json_format = true;
        self
    }

    pub fn without_logs(mut self) -> Self {
        self.show_logs = false;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Filter used when `RUST_LOG` is not set
    pub fn default_filter(&self) -> String {
        CRATES
            .iter()
            .map(|krate| format!("{}={}", krate, self.default_level))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Install the global subscriber; events go to stderr
    pub fn init(self) -> Result<(), String> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_filter()));

        let json_layer = (self.show_logs && self.json_format).then(|| {
            fmt::layer()
                .json()
                .with_target(self.show_targets)
                .with_writer(std::io::stderr)
        });

        let text_layer = (self.show_logs && !self.json_format).then(|| {
            fmt::layer()
                .with_target(self.show_targets)
                .with_writer(std::io::stderr)
        });

        let file_layer = self
            .log_file
            .map(|path| BufferLayer::new(FileLog::new(path)));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .with(text_layer)
            .with(file_layer)
            .try_init()
            .map_err(|e| format!("Failed to initialize tracing: {}", e))
    }
}
