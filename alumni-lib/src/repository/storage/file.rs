use std::{
    fmt::Write,
    fs, io,
    path::{Path, PathBuf},
};

use tracing::trace;

use super::{KeyValueStore, Result, StorageError};
use crate::fs::storage_dir;

/// A [`KeyValueStore`] that keeps each key in its own JSON file inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// A store rooted at the data directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self { dir: storage_dir()? })
    }

    /// A store rooted at `dir`, which must already exist.
    pub fn at(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_stem(key)))
    }
}

/// Encode `key` as a file stem. Lowercase ASCII letters, digits and `-` are kept; every other
/// byte becomes `_xx` in hex, so distinct keys never share a file, even on case-insensitive
/// filesystems.
fn file_stem(key: &str) -> String {
    let mut stem = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_lowercase() || byte.is_ascii_digit() || byte == b'-' {
            stem.push(char::from(byte));
        } else {
            let _ = write!(stem, "_{byte:02x}");
        }
    }
    stem
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key);
        trace!("Reading {}", path.display());

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path(key);
        trace!("Writing {}", path.display());

        fs::write(path, value).map_err(|source| StorageError::Write {
            key: key.to_string(),
            source,
        })
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Write {
                key: key.to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use tempfile::tempdir;

    use super::*;
    use crate::repository::storage::Storage;

    #[test]
    fn test_persists_across_handles() {
        let dir = tempdir().unwrap();

        Storage::new(FileStore::at(dir.path())).save("graduateFilters", &vec!["x"]);

        assert!(dir.path().join("graduate_46ilters.json").exists());
        assert_eq!(
            Storage::new(FileStore::at(dir.path())).load("graduateFilters", Vec::<String>::new()),
            vec!["x".to_string()]
        );
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("graduates"), "graduates");
        assert_eq!(file_stem("graduate_search"), "graduate_5fsearch");
        assert_eq!(file_stem("graduateSearch"), "graduate_53earch");
        assert_eq!(file_stem("../roster"), "_2e_2e_2froster");
        assert_eq!(file_stem("año"), "a_c3_b1o");
    }

    #[test]
    fn test_distinct_keys_stay_separate() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(FileStore::at(dir.path()));
        let keys = ["graduateSearch", "graduate_search", "Graduates", "graduates"];

        for key in keys {
            storage.save(key, key);
        }

        for key in keys {
            assert_eq!(storage.load(key, String::new()), key);
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), keys.len());
    }

    #[test]
    fn test_missing_dir_fails_write() {
        let dir = tempdir().unwrap();
        let store = FileStore::at(&dir.path().join("does_not_exist"));

        assert!(matches!(
            store.set_item("roster", "[]"),
            Err(StorageError::Write { .. })
        ));
        // Reads of a missing directory are just absent keys
        assert!(store.get_item("roster").unwrap().is_none());
        assert!(store.remove_item("roster").is_ok());
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(FileStore::at(&dir.path().join("gone")));

        storage.save("roster", &vec![1, 2, 3]);

        assert_eq!(storage.load("roster", Vec::<i32>::new()), Vec::<i32>::new());
    }
}
