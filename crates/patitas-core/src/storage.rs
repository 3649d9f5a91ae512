//! # Key-Value Storage
//!
//! The persisted client state (current user, auth token, favorites) lives
//! behind a small string-keyed storage trait. `MemoryStorage` backs tests
//! and ephemeral sessions, `FileStorage` keeps a JSON map on disk.

use crate::error::{StoreError, StoreResult};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Storage key holding the persisted user record (JSON)
pub const USER_KEY: &str = "user";

/// Storage key holding the bearer token, when one exists
pub const TOKEN_KEY: &str = "auth_token";

/// Storage key holding one user's favorite product ids (JSON array)
pub fn favorites_key(user_id: i64) -> String {
    format!("patitas_favorites_{user_id}")
}

/// String-keyed persistence for client-side state
pub trait KeyValueStorage: Send + Sync {
    /// Read a value, `None` when the key was never set
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove a key; removing an absent key is not an error
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Type alias for a shared storage handle (dynamic dispatch)
pub type BoxedStorage = Arc<dyn KeyValueStorage>;

/// In-memory storage, lost on drop
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = lock_entries(&self.entries)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = lock_entries(&self.entries)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut entries = lock_entries(&self.entries)?;
        entries.remove(key);
        Ok(())
    }
}

fn lock_entries(
    entries: &Mutex<HashMap<String, String>>,
) -> StoreResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
    entries
        .lock()
        .map_err(|_| StoreError::Storage("storage lock poisoned".to_string()))
}

/// File-backed storage: one JSON object per store, rewritten on mutation.
/// Small-state only, which is all the client persists.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a store at the given path. The file is created lazily on
    /// first write; a missing file reads as empty.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> StoreResult<HashMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                StoreError::Storage(format!("corrupt state file {}: {e}", self.path.display()))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(StoreError::Storage(format!(
                "cannot read {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn save(&self, entries: &HashMap<String, String>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Storage(format!("cannot create {}: {e}", parent.display()))
                })?;
            }
        }
        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| StoreError::Storage(format!("cannot encode state: {e}")))?;
        std::fs::write(&self.path, content).map_err(|e| {
            StoreError::Storage(format!("cannot write {}: {e}", self.path.display()))
        })
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}
