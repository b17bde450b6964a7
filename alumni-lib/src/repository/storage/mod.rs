//! Best-effort key-value persistence.
//!
//! [`Storage`] wraps a [`KeyValueStore`] backend, the same shape as a browser's `localStorage`,
//! and layers JSON (de)serialization and default fallbacks on top. Failures never reach the
//! caller of [`Storage::load`] or [`Storage::save`]; they are logged and the in-memory value
//! stays authoritative for the session. There is no locking across processes: a single writer
//! is assumed.

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, error, warn};

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Persistent storage is not available in this environment")]
    Unavailable,
    #[error("Failed to read key '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write key '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Stored value for key '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Raw string storage, keyed by name.
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    /// Returns the raw stored string, or `None` if the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Typed, JSON-backed view over a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct Storage {
    backend: Option<Arc<dyn KeyValueStore>>,
}

impl Storage {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Some(Arc::new(backend)),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStore::default())
    }

    /// A storage handle for an environment without persistence. Every load yields the default
    /// and every save is dropped.
    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Load the value stored under `key`, falling back to `default` if the key is absent, the
    /// stored data can't be parsed, or no storage is available.
    pub fn load<T>(&self, key: &str, default: T) -> T
    where
        T: DeserializeOwned,
    {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!("No stored value for '{key}', using default");
                default
            }
            Err(StorageError::Unavailable) => {
                debug!("Storage unavailable, using default for '{key}'");
                default
            }
            Err(err) => {
                error!("Error reading storage key '{key}': {err}");
                default
            }
        }
    }

    /// Store `value` under `key`. Errors are logged and otherwise ignored.
    pub fn save<T>(&self, key: &str, value: &T)
    where
        T: Serialize + ?Sized,
    {
        match self.try_save(key, value) {
            Ok(()) => debug!("Saved '{key}'"),
            Err(StorageError::Unavailable) => {
                debug!("Storage unavailable, '{key}' kept in memory only")
            }
            Err(err) => error!("Error writing storage key '{key}': {err}"),
        }
    }

    /// Delete whatever is stored under `key`. Errors are logged and otherwise ignored.
    pub fn remove(&self, key: &str) {
        let Some(backend) = &self.backend else {
            return;
        };

        if let Err(err) = backend.remove_item(key) {
            warn!("Error removing storage key '{key}': {err}");
        }
    }

    pub fn try_load<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let backend = self.backend.as_ref().ok_or(StorageError::Unavailable)?;

        backend
            .get_item(key)?
            .map(|raw| {
                serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
                    key: key.to_string(),
                    source,
                })
            })
            .transpose()
    }

    pub fn try_save<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let backend = self.backend.as_ref().ok_or(StorageError::Unavailable)?;

        let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })?;

        backend.set_item(key, &raw)
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::in_memory()
    }
}
