//! Resolved meetcal settings and the store they point at.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, File};

use crate::error::{MeetcalError, MeetcalResult};
use crate::meetcal_config::MeetcalConfig;
use crate::seed::default_meetings;
use crate::store::{FileStore, MeetingStore};

#[derive(Debug, Clone)]
pub struct Meetcal {
    config: MeetcalConfig,
}

impl Meetcal {
    /// Load ~/.config/meetcal/config.toml, creating a commented default on first run.
    pub fn load() -> MeetcalResult<Self> {
        let config_path = MeetcalConfig::config_path()?;

        if !config_path.exists() {
            MeetcalConfig::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> MeetcalResult<Self> {
        let config: MeetcalConfig = Config::builder()
            .add_source(File::from(config_path.to_path_buf()).required(false))
            .build()
            .map_err(|e| MeetcalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| MeetcalError::Config(e.to_string()))?;

        Ok(Meetcal { config })
    }

    pub fn from_config(config: MeetcalConfig) -> Self {
        Meetcal { config }
    }

    pub fn config(&self) -> &MeetcalConfig {
        &self.config
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Returns the data directory in display-friendly form,
    /// keeping `~` instead of expanding to the full home directory.
    pub fn display_path(&self) -> PathBuf {
        self.config.data_dir.clone()
    }

    pub fn sync_delay(&self) -> Duration {
        self.config.sync_delay()
    }

    /// Meeting store over the data directory, seeded with the default meetings.
    pub fn open_store(&self) -> MeetingStore<FileStore> {
        MeetingStore::new(FileStore::new(self.data_path()), default_meetings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meetcal/config.toml");
        MeetcalConfig::create_default_config(&path).unwrap();

        let meetcal = Meetcal::load_from(&path).unwrap();
        assert_eq!(meetcal.display_path(), PathBuf::from("~/.local/share/meetcal"));
        assert_eq!(meetcal.sync_delay(), Duration::from_millis(300));
    }

    #[test]
    fn saved_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = MeetcalConfig {
            data_dir: dir.path().join("data"),
            sync_delay_ms: 0,
        };
        config.save(&path).unwrap();

        let meetcal = Meetcal::load_from(&path).unwrap();
        assert_eq!(meetcal.data_path(), dir.path().join("data"));
        assert_eq!(meetcal.sync_delay(), Duration::ZERO);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let meetcal = Meetcal::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(meetcal.config().sync_delay_ms, 300);
    }

    #[test]
    fn invalid_value_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "sync_delay_ms = \"soon\"\n").unwrap();

        assert!(matches!(Meetcal::load_from(&path), Err(MeetcalError::Config(_))));
    }

    #[test]
    fn open_store_seeds_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let meetcal = Meetcal::from_config(MeetcalConfig {
            data_dir: dir.path().to_path_buf(),
            sync_delay_ms: 0,
        });

        let mut store = meetcal.open_store();
        assert_eq!(store.load(), default_meetings());
        assert!(dir.path().join("meetings.json").exists());
    }
}
