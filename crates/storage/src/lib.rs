//! Durable per-profile preference storage.
//!
//! The page persists exactly one key-value entry, but the file format is a
//! flat JSON object so unrelated keys written by other tools survive a
//! rewrite.

use anyhow::{anyhow, Context, Result};
use serde_json::{Map, Value};
use shared::error::{PageError, PageResult};
use std::{
    collections::BTreeMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard},
};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

const SETTINGS_FILE_NAME: &str = "settings.json";
const APP_DIR_NAME: &str = "portfolio";

/// Key-value storage scoped to one local profile.
pub trait PreferenceStore: Send {
    fn get(&self, key: &str) -> PageResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> PageResult<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> PageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> PageResult<()> {
        (**self).set(key, value)
    }
}

#[derive(Debug, Clone)]
pub struct ProfilePaths {
    pub data_root: PathBuf,
    pub settings_path: PathBuf,
}

impl ProfilePaths {
    pub fn resolve(data_dir: Option<&Path>) -> Result<Self> {
        let root = match data_dir {
            Some(path) => path.to_path_buf(),
            None => dirs::data_local_dir()
                .ok_or_else(|| anyhow!("unable to resolve local app data dir"))?
                .join(APP_DIR_NAME),
        };

        Ok(Self {
            settings_path: root.join(SETTINGS_FILE_NAME),
            data_root: root,
        })
    }

    pub fn ensure_data_root(&self) -> Result<()> {
        fs::create_dir_all(&self.data_root).with_context(|| {
            format!(
                "failed to create data directory '{}'",
                self.data_root.display()
            )
        })
    }
}

/// JSON object on disk. Every write replaces the file atomically, so
/// concurrent app instances resolve to last-writer-wins.
#[derive(Debug, Clone)]
pub struct PreferenceFile {
    path: PathBuf,
}

impl PreferenceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn open(paths: &ProfilePaths) -> Self {
        Self::new(paths.settings_path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored object. Content that is not a JSON object reads as
    /// empty so the next write replaces it; only I/O failures are errors.
    fn read_object(&self) -> PageResult<Map<String, Value>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(PageError::Io(err)),
        };

        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => {
                warn!(path = %self.path.display(), "preference file does not hold a JSON object; ignoring it");
                Ok(Map::new())
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "preference file is not valid JSON; ignoring it");
                Ok(Map::new())
            }
        }
    }

    /// Writes through a uniquely named temp file in the same directory, then
    /// renames it over the target.
    fn write_object(&self, map: &Map<String, Value>) -> PageResult<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let serialized = serde_json::to_string_pretty(map)
            .map_err(|err| PageError::persistence(err.to_string()))?;
        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(serialized.as_bytes())?;
        tmp.persist(&self.path).map_err(|err| PageError::Io(err.error))?;
        Ok(())
    }
}

impl PreferenceStore for PreferenceFile {
    fn get(&self, key: &str) -> PageResult<Option<String>> {
        let map = self.read_object()?;
        Ok(map.get(key).and_then(Value::as_str).map(str::to_string))
    }

    fn set(&mut self, key: &str, value: &str) -> PageResult<()> {
        // Re-read so keys written by another instance are kept.
        let mut map = self.read_object()?;
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.write_object(&map)?;
        debug!(key, value, path = %self.path.display(), "preference written");
        Ok(())
    }
}

/// Session-only storage; also used when no profile directory is available.
/// Clones share the same entries, like two tabs over one browser profile.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.lock().insert(key.to_string(), value.to_string());
        store
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> PageResult<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> PageResult<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
