//! Global meetcal configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SYNC_DELAY_MS;
use crate::error::{MeetcalError, MeetcalResult};

static DEFAULT_DATA_PATH: &str = "~/.local/share/meetcal";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn default_sync_delay_ms() -> u64 {
    DEFAULT_SYNC_DELAY_MS
}

/// Configuration at ~/.config/meetcal/config.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MeetcalConfig {
    /// Where stored meetings live
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Length of the simulated sync round-trip
    #[serde(default = "default_sync_delay_ms")]
    pub sync_delay_ms: u64,
}

impl Default for MeetcalConfig {
    fn default() -> Self {
        MeetcalConfig {
            data_dir: default_data_dir(),
            sync_delay_ms: default_sync_delay_ms(),
        }
    }
}

impl MeetcalConfig {
    pub fn config_path() -> MeetcalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| MeetcalError::Config("Could not determine config directory".into()))?
            .join("meetcal");

        Ok(config_dir.join("config.toml"))
    }

    pub fn sync_delay(&self) -> Duration {
        Duration::from_millis(self.sync_delay_ms)
    }

    /// Save the config to `path` as TOML.
    pub fn save(&self, path: &Path) -> MeetcalResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| MeetcalError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| MeetcalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> MeetcalResult<()> {
        let contents = format!(
            "\
# meetcal configuration

# Where meetings are stored:
# data_dir = \"{}\"

# Simulated sync round-trip, in milliseconds:
# sync_delay_ms = {}
",
            DEFAULT_DATA_PATH, DEFAULT_SYNC_DELAY_MS
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                MeetcalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| MeetcalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
