//! Whole-document persistence of the work log.
//!
//! Every action loads the full file, mutates it and writes it back. The file
//! is overwritten in place, without locking: two processes working on the same
//! log can lose each other's updates.

use crate::errors::AppResult;
use crate::models::work_log::WorkLog;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the log. A missing file is an empty log.
    pub fn load(&self) -> AppResult<WorkLog> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "log file absent, starting empty");
                return Ok(WorkLog::default());
            }
            Err(e) => return Err(e.into()),
        };

        let log: WorkLog = serde_json::from_str(&content)?;
        tracing::debug!(
            path = %self.path.display(),
            days = log.entries.len(),
            state = %log.state,
            "log loaded"
        );
        Ok(log)
    }

    /// Serialize and overwrite the backing file.
    pub fn save(&self, log: &WorkLog) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(log)?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), state = %log.state, "log saved");
        Ok(())
    }
}
