use platon_next_core::{NavigationError, QueueError};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error(transparent)]
    Queue(#[from] QueueError),

    #[error("State file not found: {path}")]
    StateFileNotFound { path: PathBuf },

    #[error("State file already exists: {path}")]
    StateFileExists { path: PathBuf },

    #[error("Invalid exercise params: {0}")]
    InvalidParams(String),

    #[error("{command} failed: {reason}")]
    CommandFailed { command: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CliError {
    pub fn state_not_found(path: PathBuf) -> Self {
        CliError::StateFileNotFound { path }
    }

    pub fn state_exists(path: PathBuf) -> Self {
        CliError::StateFileExists { path }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
