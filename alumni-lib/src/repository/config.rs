use std::{fs, path::Path, sync::Arc};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, warn};

use crate::{
    Error, Result,
    fs::config_dir,
    repository::storage::{FileStore, Storage},
    search::FIRST_YEAR,
};

const FILE_NAME: &str = "core.toml";

/// Handle to the shared core configuration
pub type Cfg = Arc<RwLock<CoreConfig>>;

/// Where the roster and filter state are persisted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StorageKind {
    #[default]
    File,
    Memory,
}

/// The core configuration, serialized to TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub storage: StorageKind,
    pub roster_key: String,
    pub filters_key: String,
    pub search_key: String,
    /// First year offered when filtering by entry year.
    pub first_year: i32,
    /// Start an empty store with the sample graduates.
    pub seed_sample_roster: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            storage: StorageKind::default(),
            roster_key: "graduates".to_string(),
            filters_key: "graduateFilters".to_string(),
            search_key: "graduateSearch".to_string(),
            first_year: FIRST_YEAR,
            seed_sample_roster: true,
        }
    }
}

impl CoreConfig {
    /// Load the configuration from the config directory, writing the defaults if there is none.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_dir()?.join(FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            Ok(toml::from_str(&contents).unwrap_or_else(|err| {
                warn!("Ignoring unreadable config {}: {err}", path.display());
                Self::default()
            }))
        } else {
            debug!("No config at {}, writing defaults", path.display());
            let cfg = Self::default();
            cfg.save_to(path)?;
            Ok(cfg)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self).map_err(|err| Error::Config(err.to_string()))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;

        Ok(())
    }

    /// Open the storage backend this configuration names.
    pub fn open_storage(&self) -> Storage {
        match self.storage {
            StorageKind::Memory => Storage::in_memory(),
            StorageKind::File => match FileStore::new() {
                Ok(store) => Storage::new(store),
                Err(err) => {
                    warn!("File storage unavailable, keeping data in memory only: {err}");
                    Storage::unavailable()
                }
            },
        }
    }

    /// Return a mock configuration for tests.
    #[cfg(test)]
    pub(crate) fn mock() -> Self {
        Self {
            storage: StorageKind::Memory,
            seed_sample_roster: false,
            ..Default::default()
        }
    }
}
