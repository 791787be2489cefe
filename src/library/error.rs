//! Error types for the library aggregate and its storage file.

use crate::products::ProductError;
use crate::purchases::PurchaseError;
use crate::users::UserError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures reading or writing the storage file.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The file exists but does not hold a valid library.
    #[error("Malformed library file {}: {source}", .path.display())]
    Deserialization {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The in-memory library could not be encoded.
    #[error("Failed to encode library: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The file could not be read or written.
    #[error("I/O error on library file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Any error returned by a [`Library`](super::Library) operation.
///
/// The `#[from]` conversions let operations mix store calls for different
/// entity types with `?`.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Purchase(#[from] PurchaseError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
