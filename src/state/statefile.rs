//! StateFile - YAML state file CRUD operations

use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur while reading or writing a state file
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Failed to access state file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in state file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Handle to a YAML file holding small persistent key/value state.
///
/// The handle caches nothing: every operation re-reads the file, and every
/// mutating operation rewrites it in full. Concurrent writers race with
/// last-write-wins semantics; this is single-operator CLI state, not a
/// database.
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    /// Create a handle for the given path. The file itself is created lazily
    /// on first access.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full state mapping from disk.
    ///
    /// A missing file is created empty and yields an empty mapping, as does
    /// an existing file whose document is empty or null.
    pub fn load(&self) -> Result<Mapping, StateError> {
        if self.path.exists() {
            let content = fs::read_to_string(&self.path).map_err(|source| StateError::Io {
                path: self.path.clone(),
                source,
            })?;

            let data: Option<Mapping> =
                serde_yaml::from_str(&content).map_err(|source| StateError::Parse {
                    path: self.path.clone(),
                    source,
                })?;

            Ok(data.unwrap_or_default())
        } else {
            fs::File::create(&self.path).map_err(|source| StateError::Io {
                path: self.path.clone(),
                source,
            })?;

            Ok(Mapping::new())
        }
    }

    /// Serialize the mapping and overwrite the file with it.
    pub fn save(&self, data: &Mapping) -> Result<(), StateError> {
        let content = serde_yaml::to_string(data).map_err(|source| StateError::Parse {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, content).map_err(|source| StateError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Look up a single key. Returns `None` if the key is absent.
    pub fn get(&self, key: &str) -> Result<Option<Value>, StateError> {
        let data = self.load()?;
        Ok(data.get(key).cloned())
    }

    /// Insert or overwrite a single key, rewriting the whole file.
    pub fn set(&self, key: &str, value: Value) -> Result<(), StateError> {
        let mut data = self.load()?;
        data.insert(Value::String(key.to_string()), value);
        self.save(&data)
    }

    /// Remove a single key if present (no-op otherwise), rewriting the file.
    pub fn delete(&self, key: &str) -> Result<(), StateError> {
        let mut data = self.load()?;
        data.remove(key);
        self.save(&data)
    }
}

// =============================================================================
// Tests
// =============================================================================
