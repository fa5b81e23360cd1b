use crate::infrastructure::{CliError, Result};
use platon_next_core::{ActivitySession, ActivitySnapshot};
use std::fs;
use std::path::{Path, PathBuf};

/// Activity snapshot persisted as a JSON file
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load_snapshot(&self) -> Result<ActivitySnapshot> {
        if !self.exists() {
            return Err(CliError::state_not_found(self.path.clone()));
        }

        let json = fs::read_to_string(&self.path)?;
        Ok(ActivitySnapshot::from_json(&json)?)
    }

    pub fn load(&self) -> Result<ActivitySession> {
        let snapshot = self.load_snapshot()?;
        let session = ActivitySession::from_snapshot(snapshot)?;
        tracing::debug!("Loaded activity from {}", self.path.display());
        Ok(session)
    }

    /// Written to a sibling temp file, then renamed over the state file
    pub fn save(&self, session: &ActivitySession) -> Result<()> {
        let json = session.to_snapshot().to_json_pretty()?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!("Saved activity to {}", self.path.display());
        Ok(())
    }

    /// Write a fresh activity, refusing to overwrite an existing one
    pub fn create(&self, session: &ActivitySession) -> Result<()> {
        if self.exists() {
            return Err(CliError::state_exists(self.path.clone()));
        }
        self.save(session)
    }
}
