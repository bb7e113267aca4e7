//! Local persistence for the single profile record.
//!
//! One key holds the whole serialized [`Profile`]. There is no versioning:
//! a record that no longer parses is treated as absent.
//!
//! Backends:
//! - web: `window.localStorage`
//! - native: one JSON file under the platform data directory
//! - tests: in-memory map

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;
use tracing::{debug, error};

use super::config::STORAGE_KEY;
use super::profile::Profile;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("record could not be (de)serialized: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Raw key-value access. Implementations only move strings around.
pub trait StorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read the stored profile; missing or malformed records yield `None`.
pub fn load(backend: &dyn StorageBackend) -> Option<Profile> {
    let raw = match backend.read(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            error!(%err, "failed to read saved profile");
            return None;
        }
    };

    match serde_json::from_str::<Profile>(&raw) {
        Ok(profile) => {
            debug!(name = %profile.name, "loaded saved profile");
            Some(profile)
        }
        Err(err) => {
            error!(%err, "failed to parse saved profile; starting fresh");
            None
        }
    }
}

/// Overwrite the stored record with `profile`.
pub fn save(backend: &dyn StorageBackend, profile: &Profile) -> Result<(), StorageError> {
    let json = serde_json::to_string(profile)?;
    backend.write(STORAGE_KEY, &json)
}

pub fn clear(backend: &dyn StorageBackend) -> Result<(), StorageError> {
    backend.remove(STORAGE_KEY)
}

/// Backend for the current platform.
pub fn platform_backend() -> Rc<dyn StorageBackend> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(LocalStorageBackend)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match FileBackend::in_data_dir() {
            Ok(backend) => Rc::new(backend),
            Err(err) => {
                error!(%err, "no data directory; profile will not survive restarts");
                Rc::new(MemoryBackend::default())
            }
        }
    }
}

/// Volatile backend used in tests and as a last resort.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageBackend;

#[cfg(target_arch = "wasm32")]
impl LocalStorageBackend {
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("window unavailable".into()))?
            .local_storage()
            .map_err(|_| StorageError::Unavailable("localStorage access denied".into()))?
            .ok_or_else(|| StorageError::Unavailable("localStorage missing".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl StorageBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable("localStorage read failed".into()))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Unavailable("localStorage write failed".into()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|_| StorageError::Unavailable("localStorage remove failed".into()))
    }
}

/// One `<key>.json` file per key inside a directory.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileBackend {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn in_data_dir() -> Result<Self, StorageError> {
        use super::config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER};

        let dirs = directories::ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .ok_or_else(|| StorageError::Unavailable("unable to determine data directory".into()))?;
        Ok(Self::new(dirs.data_dir()))
    }

    fn path_for(&self, key: &str) -> std::path::PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
