use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Storage file used when nothing else is configured.
pub const DEFAULT_STORAGE_PATH: &str = "library.json";

/// Environment variable overriding the storage file.
pub const STORAGE_PATH_ENV: &str = "LIBRARY_PATH";

/// Construction options for a [`Library`](super::Library).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryConfig {
    pub storage_path: PathBuf,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}

impl LibraryConfig {
    /// Reads `LIBRARY_PATH`, falling back to [`DEFAULT_STORAGE_PATH`] when it is unset or empty.
    pub fn from_env() -> Self {
        Self {
            storage_path: storage_path_from(env::var_os(STORAGE_PATH_ENV)),
        }
    }

    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = path.into();
        self
    }
}

fn storage_path_from(value: Option<OsString>) -> PathBuf {
    value
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_PATH))
}
