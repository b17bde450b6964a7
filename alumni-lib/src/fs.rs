use std::{fs::create_dir_all, io, path::PathBuf};

use xdg::BaseDirectories;

/// Returns the path to the configuration directory. If it doesn't exist when this function is
/// called, it will be created.
pub fn config_dir() -> io::Result<PathBuf> {
    ensure(xdg_prefix().get_config_home())
}

/// Returns the path to the data directory. If it doesn't exist when this function is called, it
/// will be created.
pub fn data_dir() -> io::Result<PathBuf> {
    ensure(xdg_prefix().get_data_home())
}

/// Directory backing the file storage backend, one JSON document per key.
pub fn storage_dir() -> io::Result<PathBuf> {
    let path = data_dir()?.join("storage");
    create_dir_all(&path)?;
    Ok(path)
}

fn ensure(path: Option<PathBuf>) -> io::Result<PathBuf> {
    let path = path.ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "$HOME must exist"))?;

    create_dir_all(&path)?;

    Ok(path)
}

fn xdg_prefix() -> BaseDirectories {
    xdg::BaseDirectories::with_prefix("alumni")
}
