//! Key-value persistence for string values.
//!
//! Values are opaque strings; callers decide the encoding. [`FileStorage`]
//! keeps one file per key, [`MemoryStorage`] is for tests and ephemeral runs.

use std::{collections::HashMap, fs, io, path::PathBuf};

use tracing::debug;

use crate::{config::project_dirs, error::StorageError};

pub trait Storage {
    /// Read the value stored under `key`, or `None` if nothing was written yet.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage rooted in the platform data directory.
    pub fn in_data_dir() -> Result<Self, StorageError> {
        let dirs = project_dirs().ok_or(StorageError::NoDataDir)?;
        Ok(Self::new(dirs.data_dir()))
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        fs::write(&path, value)?;
        debug!(path = %path.display(), "wrote stored value");
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
