//! Best-score persistence for the terminal binary.
//!
//! [`JsonFileStore`] keeps string entries in a small JSON file:
//!
//! ```json
//! { "entries": { "2048-best-score": "1024" } }
//! ```
//!
//! Every `set` rewrites the whole file. [`AppStore`] lets the binary pick between
//! the file and an in-memory store at startup.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{KeyValueStore, MemoryStore};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed store file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// Key-value store persisted as a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    file: StoreFile,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let file = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).map_err(|source| StoreError::Json {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => StoreFile::default(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        log::debug!("opened store {} ({} entries)", path.display(), file.entries.len());
        Ok(Self { path, file })
    }

    pub fn len(&self) -> usize {
        self.file.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.file.entries.is_empty()
    }

    fn save(&self) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = serde_json::to_string_pretty(&self.file).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, text).map_err(io_err)
    }
}

impl KeyValueStore for JsonFileStore {
    type Error = StoreError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.file.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.file
            .entries
            .insert(key.to_string(), value.to_string());
        self.save()
    }
}

/// The store the binary runs with
#[derive(Debug, Clone)]
pub enum AppStore {
    Memory(MemoryStore),
    File(JsonFileStore),
}

impl AppStore {
    /// Open the file store at `path`, or an in-memory store when `path` is `None`.
    ///
    /// An unreadable file falls back to memory so the game still starts.
    pub fn open(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("best score persistence disabled");
            return Self::Memory(MemoryStore::new());
        };
        match JsonFileStore::open(path) {
            Ok(store) => Self::File(store),
            Err(e) => {
                log::warn!("{}; keeping best score in memory", e);
                Self::Memory(MemoryStore::new())
            }
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, Self::File(_))
    }
}

impl KeyValueStore for AppStore {
    type Error = StoreError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        match self {
            Self::Memory(store) => Ok(store.get(key).unwrap_or_else(|e| match e {})),
            Self::File(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        match self {
            Self::Memory(store) => {
                store.set(key, value).unwrap_or_else(|e| match e {});
                Ok(())
            }
            Self::File(store) => store.set(key, value),
        }
    }
}
