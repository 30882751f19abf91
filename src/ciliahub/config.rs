use crate::dataset::DEFAULT_DATA_URL;
use crate::error::{CiliaHubError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_TOP_N: usize = 5;

/// Configuration for ciliahub, stored next to the usage counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CiliaHubConfig {
    /// Where the gene table JSON is fetched from when no `--data` override
    /// is given.
    #[serde(default = "default_data_url")]
    pub data_url: String,

    /// How many entries the popular-genes view shows by default.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_data_url() -> String {
    DEFAULT_DATA_URL.to_string()
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl Default for CiliaHubConfig {
    fn default() -> Self {
        Self {
            data_url: default_data_url(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl CiliaHubConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CiliaHubError::Io)?;
        let config: CiliaHubConfig =
            serde_json::from_str(&content).map_err(CiliaHubError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CiliaHubError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CiliaHubError::Serialization)?;
        fs::write(config_path, content).map_err(CiliaHubError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_the_published_dataset() {
        let config = CiliaHubConfig::default();
        assert_eq!(config.data_url, DEFAULT_DATA_URL);
        assert_eq!(config.top_n, 5);
    }

    #[test]
    fn load_missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CiliaHubConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, CiliaHubConfig::default());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();

        let config = CiliaHubConfig {
            data_url: "https://example.org/genes.json".to_string(),
            top_n: 10,
        };
        config.save(dir.path()).unwrap();

        let loaded = CiliaHubConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"top_n": 10}"#).unwrap();

        let config = CiliaHubConfig::load(dir.path()).unwrap();
        assert_eq!(config.top_n, 10);
        assert_eq!(config.data_url, DEFAULT_DATA_URL);
    }
}
