pub mod error;

use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    sync::{Arc, RwLock},
};

use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::model::{AccentPreference, FavouriteEntry};

pub use error::StorageError;

pub const FAVOURITES_KEY: &str = "rf_favourites_v1";
pub const ACCENT_KEY: &str = "rf_accent_v1";

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// One `<key>.json` file per key inside `dir`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(tmp, self.path(key))?;
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StorageError::Unavailable("lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StorageError::Unavailable("lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, StorageError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

fn write_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

pub fn load_favourites(store: &dyn KeyValueStore) -> Vec<FavouriteEntry> {
    match read_json(store, FAVOURITES_KEY) {
        Ok(entries) => entries.unwrap_or_default(),
        Err(e) => {
            warn!(error = %e, "discarding stored favourites");
            Vec::new()
        }
    }
}

pub fn save_favourites(store: &dyn KeyValueStore, entries: &[FavouriteEntry]) {
    if let Err(e) = write_json(store, FAVOURITES_KEY, entries) {
        warn!(error = %e, "failed to save favourites");
    }
}

pub fn load_accent(store: &dyn KeyValueStore) -> AccentPreference {
    match read_json::<AccentPreference>(store, ACCENT_KEY) {
        Ok(Some(accent)) => AccentPreference::with_hue(accent.h).with(accent.s, accent.l),
        Ok(None) => AccentPreference::default(),
        Err(e) => {
            warn!(error = %e, "discarding stored accent");
            AccentPreference::default()
        }
    }
}

pub fn save_accent(store: &dyn KeyValueStore, accent: AccentPreference) {
    if let Err(e) = write_json(store, ACCENT_KEY, &accent) {
        warn!(error = %e, "failed to save accent");
    }
}
