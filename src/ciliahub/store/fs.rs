use super::UsageStore;
use crate::error::{CiliaHubError, Result};
use crate::usage::UsageCounters;
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

const COUNTERS_FILENAME: &str = "popular_queries.json";

/// File-backed usage-counter store: one JSON file in the session data
/// directory.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store rooted in the per-user data directory.
    pub fn session_default() -> Result<Self> {
        let dirs = ProjectDirs::from("org", "rarediseaselab", "ciliahub").ok_or_else(|| {
            CiliaHubError::Store("could not determine a data directory".to_string())
        })?;
        Ok(Self::new(dirs.data_dir().join(COUNTERS_FILENAME)))
    }

    /// Store rooted in an explicit directory (used by the CLI to honor a
    /// `CILIAHUB_HOME` override, and by tests).
    pub fn in_dir(dir: &std::path::Path) -> Self {
        Self::new(dir.join(COUNTERS_FILENAME))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl UsageStore for FileStore {
    fn load(&self) -> Result<UsageCounters> {
        if !self.path.exists() {
            return Ok(UsageCounters::new());
        }
        let content = fs::read_to_string(&self.path).map_err(CiliaHubError::Io)?;
        let counters: UsageCounters =
            serde_json::from_str(&content).map_err(CiliaHubError::Serialization)?;
        Ok(counters)
    }

    fn save(&mut self, counters: &UsageCounters) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(CiliaHubError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(counters).map_err(CiliaHubError::Serialization)?;
        fs::write(&self.path, content).map_err(CiliaHubError::Io)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(CiliaHubError::Io)?;
        }
        Ok(())
    }
}
