//! Load/save cycle for the storage file.
//!
//! The whole library is one JSON document with three keyed collections:
//!
//! ```text
//! {
//!     "Users": { "<id>": { "ID": ..., "Name": ..., "Budget": ... } },
//!     "Products": { "<id>": { "ID": ..., "Title": ..., "Price": ..., "Category": "Books" } },
//!     "Purchases": { "<id>": { "ID": ..., "User": "<user id>", "Product": "<product id>" } }
//! }
//! ```
//!
//! Saving rewrites the file in full, tab-indented, with keys sorted.

use super::{Library, LibraryConfig, LibraryError, StorageError};
use crate::framework::ResourceStore;
use crate::model::{Product, Purchase, User};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io;
use tracing::{debug, info, instrument};

/// Borrowed view written by [`Library::save`].
#[derive(Serialize)]
struct SnapshotRef<'a> {
    #[serde(rename = "Users")]
    users: &'a ResourceStore<User>,
    #[serde(rename = "Products")]
    products: &'a ResourceStore<Product>,
    #[serde(rename = "Purchases")]
    purchases: &'a ResourceStore<Purchase>,
}

/// Owned form read by [`Library::load`]. All three collections are required.
#[derive(Deserialize)]
struct Snapshot {
    #[serde(rename = "Users")]
    users: ResourceStore<User>,
    #[serde(rename = "Products")]
    products: ResourceStore<Product>,
    #[serde(rename = "Purchases")]
    purchases: ResourceStore<Purchase>,
}

impl Library {
    /// Reads the library from `config.storage_path`.
    ///
    /// Returns `Ok(None)` when the file does not exist: the library has never
    /// been saved. Any other read failure is a [`StorageError::Io`], and content
    /// that is not a valid library is a [`StorageError::Deserialization`].
    #[instrument(skip_all, fields(path = %config.storage_path.display()))]
    pub fn load(config: LibraryConfig) -> Result<Option<Self>, LibraryError> {
        let content = match fs::read(&config.storage_path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No library file");
                return Ok(None);
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: config.storage_path,
                    source,
                }
                .into())
            }
        };

        let snapshot: Snapshot =
            serde_json::from_slice(&content).map_err(|source| StorageError::Deserialization {
                path: config.storage_path.clone(),
                source,
            })?;

        info!(
            users = snapshot.users.len(),
            products = snapshot.products.len(),
            purchases = snapshot.purchases.len(),
            "Loaded"
        );
        Ok(Some(Self {
            config,
            users: snapshot.users,
            products: snapshot.products,
            purchases: snapshot.purchases,
        }))
    }

    /// Loads the library, or starts an empty one if it was never saved.
    ///
    /// Load errors are returned unchanged.
    pub fn new(config: LibraryConfig) -> Result<Self, LibraryError> {
        match Self::load(config.clone())? {
            Some(library) => Ok(library),
            None => {
                info!(path = %config.storage_path.display(), "Starting empty library");
                Ok(Self::empty(config))
            }
        }
    }

    /// Overwrites the storage file with the full current state.
    ///
    /// There is no locking: two processes saving to the same path race, and
    /// the last writer wins.
    #[instrument(skip_all, fields(path = %self.config.storage_path.display()))]
    pub fn save(&self) -> Result<(), LibraryError> {
        let snapshot = SnapshotRef {
            users: &self.users,
            products: &self.products,
            purchases: &self.purchases,
        };

        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
        snapshot
            .serialize(&mut serializer)
            .map_err(StorageError::Serialization)?;

        fs::write(&self.config.storage_path, &buf).map_err(|source| StorageError::Io {
            path: self.config.storage_path.clone(),
            source,
        })?;

        info!(
            users = self.users.len(),
            products = self.products.len(),
            purchases = self.purchases.len(),
            bytes = buf.len(),
            "Saved"
        );
        Ok(())
    }
}
