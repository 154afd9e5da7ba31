//! Key/value persistence for user preferences.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("failed to access preferences file: {0}")]
    Io(#[from] std::io::Error),

    #[error("preferences file is malformed: {0}")]
    Format(#[from] serde_json::Error),
}

/// String-valued preference storage.
pub trait PreferenceStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// In-process store, used in tests and when no preferences file is wanted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, String>>,
    writes: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `save` calls.
    pub fn write_count(&self) -> usize {
        *self.writes.lock().expect("preferences lock poisoned")
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let values = self.values.lock().expect("preferences lock poisoned");
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values
            .lock()
            .expect("preferences lock poisoned")
            .insert(key.to_string(), value.to_string());
        *self.writes.lock().expect("preferences lock poisoned") += 1;
        Ok(())
    }
}

/// JSON object file mapping keys to string values.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Store under the user's config directory, if one can be determined.
    pub fn open_default() -> Option<Self> {
        let mut path = dirs::config_dir()?;
        path.push("folio");
        path.push("preferences.json");
        Some(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let _guard = self.lock.lock().expect("preferences lock poisoned");
        Ok(self.read_all()?.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let _guard = self.lock.lock().expect("preferences lock poisoned");
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        Ok(())
    }
}
