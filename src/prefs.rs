//! Preference persistence port.
//!
//! Small, uncoordinated key/value flags (version-notice dismissal, recent
//! dictionary searches) behind an explicit trait, so a file-backed store
//! and an in-memory store satisfy the same interface.

use std::collections::HashMap;
use std::fs::{create_dir_all, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Boolean-as-text flag controlling the version notice banner
pub const SHOW_VERSION_NOTICE: &str = "showVersionNotice";

/// JSON-encoded list (max 5 entries) of recent dictionary searches
pub const RECENT_SEARCHES: &str = "recentDictionarySearches";

/// Typed get/set/remove over persisted preference flags
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        (**self).remove(key)
    }
}

/// File-backed preference store
///
/// Keeps the whole key/value map in one pretty-printed JSON file under the
/// database directory and rewrites it on every change. Single-writer in
/// practice; a missing or unreadable file starts empty.
pub struct FilePreferences {
    path: PathBuf,
    cache: RwLock<HashMap<String, String>>,
}

impl FilePreferences {
    /// Open (or create) the preference file inside `database_dir`
    pub fn open(database_dir: &str) -> Result<FilePreferences, String> {
        if !Path::new(database_dir).exists() {
            create_dir_all(database_dir)
                .map_err(|_| "Failed to create database directory".to_string())?;
        }

        let path = Path::new(database_dir).join("prefs.json");
        let cache = match File::open(&path) {
            Ok(mut file) => {
                let mut contents = String::new();
                if file.read_to_string(&mut contents).is_err() {
                    return Err("Failed to read preferences file".to_string());
                }
                serde_json::from_str(&contents)
                    .map_err(|_| "Failed to parse preferences data".to_string())?
            }
            Err(_) => HashMap::new(),
        };

        Ok(FilePreferences {
            path,
            cache: RwLock::new(cache),
        })
    }

    fn persist(&self, map: &HashMap<String, String>) -> Result<(), String> {
        let json = serde_json::to_string_pretty(map)
            .map_err(|_| "Failed to serialize preferences data".to_string())?;

        let mut file = File::create(&self.path)
            .map_err(|_| "Failed to create preferences file".to_string())?;

        file.write_all(json.as_bytes())
            .map_err(|_| "Failed to write preferences data".to_string())
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.cache.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let mut map = self
            .cache
            .write()
            .map_err(|_| "Preference store lock poisoned".to_string())?;
        map.insert(key.to_string(), value.to_string());
        self.persist(&map)
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        let mut map = self
            .cache
            .write()
            .map_err(|_| "Preference store lock poisoned".to_string())?;
        map.remove(key);
        self.persist(&map)
    }
}

/// In-memory preference store for tests
#[derive(Default)]
pub struct MemoryPreferences {
    map: RwLock<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> MemoryPreferences {
        MemoryPreferences::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.map.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.map
            .write()
            .map_err(|_| "Preference store lock poisoned".to_string())?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.map
            .write()
            .map_err(|_| "Preference store lock poisoned".to_string())?
            .remove(key);
        Ok(())
    }
}
