//! The in-memory configuration store.
//!
//! [`ConfigStore`] holds a mapping from string keys to dynamic JSON values
//! and an optional bound file path.  Keys are kept in a `BTreeMap`, so
//! [`ConfigStore::keys`] and the serialized output are always sorted; key
//! order carries no meaning beyond that.
//!
//! # Insert-only writes
//!
//! [`ConfigurationManager::set_value`] is *insert-only*: it stores a value
//! only when the key is absent and reports `false` otherwise, leaving the
//! first value in place.  To replace a value, delete the key and set it again:
//!
//! ```rust
//! use confstore_core::{ConfigStore, ConfigurationManager};
//! use serde_json::json;
//!
//! let mut store = ConfigStore::new();
//! store.set_value("mode", json!("fast"));
//!
//! store.delete("mode");
//! store.set_value("mode", json!("safe"));
//! assert_eq!(store.get_value("mode"), Some(&json!("safe")));
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::store::error::StoreError;
use crate::store::manager::ConfigurationManager;

/// Key → JSON value configuration store with an optional bound file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    entries: BTreeMap<String, Value>,
    file_name: Option<PathBuf>,
}

impl ConfigStore {
    /// Creates an empty store with no bound file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store bound to `path`.
    ///
    /// No I/O happens here; call [`ConfigurationManager::load`] to read the
    /// file.
    pub fn with_file_name(path: impl Into<PathBuf>) -> Self {
        Self {
            entries: BTreeMap::new(),
            file_name: Some(path.into()),
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the stored keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Serializes the mapping as indented, human-readable JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialize`] if any value cannot be encoded.
    pub fn to_json_pretty(&self) -> Result<String, StoreError> {
        serde_json::to_string_pretty(&self.entries).map_err(StoreError::Serialize)
    }

    /// Converts `value` to JSON and stores it with insert-only semantics.
    ///
    /// Returns `Ok(true)` on insert and `Ok(false)` if `key` already existed
    /// (the existing value is kept).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialize`] if `value` is not representable as
    /// JSON (for example a map with non-string keys).  The mapping is left
    /// unchanged.
    pub fn set_serialized<T>(&mut self, key: &str, value: &T) -> Result<bool, StoreError>
    where
        T: Serialize + ?Sized,
    {
        if self.exists(key) {
            return Ok(false);
        }
        let value = serde_json::to_value(value).map_err(StoreError::Serialize)?;
        Ok(self.set_value(key, value))
    }
}

impl ConfigurationManager for ConfigStore {
    fn exists(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn set_value(&mut self, key: &str, value: Value) -> bool {
        if self.exists(key) {
            return false;
        }
        self.entries.insert(key.to_string(), value);
        true
    }

    fn get_value(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    fn clear(&mut self) {
        self.entries = BTreeMap::new();
    }

    fn to_json(&self) -> Result<String, StoreError> {
        serde_json::to_string(&self.entries).map_err(StoreError::Serialize)
    }

    fn from_json_bytes(&mut self, bytes: &[u8]) -> Result<(), StoreError> {
        // Decode into a fresh map first so a failure leaves `entries` intact.
        let parsed: BTreeMap<String, Value> =
            serde_json::from_slice(bytes).map_err(StoreError::Parse)?;
        debug!("replacing configuration with {} entries", parsed.len());
        self.entries = parsed;
        Ok(())
    }

    fn set_file_name(&mut self, path: PathBuf) {
        self.file_name = Some(path);
    }

    fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }
}

impl FromStr for ConfigStore {
    type Err = StoreError;

    /// Parses a JSON object into a new, unbound store.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut store = ConfigStore::new();
        store.from_json(s)?;
        Ok(store)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
