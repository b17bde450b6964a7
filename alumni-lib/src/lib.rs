//! Core of the graduate profiles directory.
//!
//! Everything that is not presentation lives here: the key-value storage adapter, the search
//! normalizer and roster filters, the profile form assembler and the [`Repository`] that ties
//! them together for a browsing session.

use thiserror::Error;

pub mod export;
pub mod form;
pub mod fs;
pub mod repository;
pub mod search;

pub use repository::Repository;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Storage(#[from] repository::storage::StorageError),
    #[error(transparent)]
    Validation(#[from] form::ValidationError),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("No existe un perfil con el identificador {0}")]
    ProfileNotFound(repository::ProfileId),
    #[error("A profile with id {0} is already in the roster")]
    DuplicateId(repository::ProfileId),
    #[error("Failed to export profile: {0}")]
    Export(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
