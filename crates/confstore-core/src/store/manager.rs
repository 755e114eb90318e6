//! The configuration-management capability interface.
//!
//! Any type that owns a key → JSON value mapping can implement
//! [`ConfigurationManager`].  Implementors supply the map operations and the
//! bound file path; file persistence (both the bound-path and the
//! path-per-call variants) comes from the provided methods, which compose
//! [`ConfigurationManager::to_json`] / [`ConfigurationManager::from_json`] with
//! the whole-file helpers in [`crate::persistence`].
//!
//! The trait is object safe, so heterogeneous stores can be handled as
//! `Box<dyn ConfigurationManager>`.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::persistence;
use crate::store::error::StoreError;

/// Operations supported by a configuration store.
pub trait ConfigurationManager {
    /// Returns `true` iff `key` is present in the mapping.
    fn exists(&self, key: &str) -> bool;

    /// Inserts `key → value` only if `key` is absent.
    ///
    /// Returns `true` on insert and `false` if the key already existed.  An
    /// existing value is never overwritten; callers that need to replace a
    /// value must [`delete`](ConfigurationManager::delete) it first.
    fn set_value(&mut self, key: &str, value: Value) -> bool;

    /// Returns the value stored under `key`, or `None` when absent.
    fn get_value(&self, key: &str) -> Option<&Value>;

    /// Removes `key`, returning whether a removal occurred.
    fn delete(&mut self, key: &str) -> bool;

    /// Replaces the mapping with an empty one.  The bound path is kept.
    fn clear(&mut self);

    /// Serializes the whole mapping to a compact JSON object text.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialize`] if any value cannot be encoded.
    fn to_json(&self) -> Result<String, StoreError>;

    /// Parses `text` as a JSON object and replaces the whole mapping with it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Parse`] if `text` is not valid JSON or is not an
    /// object.  The existing mapping is left unchanged in that case.
    fn from_json(&mut self, text: &str) -> Result<(), StoreError> {
        self.from_json_bytes(text.as_bytes())
    }

    /// Byte-level form of [`from_json`](ConfigurationManager::from_json).
    ///
    /// Input that is not valid UTF-8 is malformed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Parse`] if `bytes` is not a UTF-8 JSON object.
    /// The existing mapping is left unchanged in that case.
    fn from_json_bytes(&mut self, bytes: &[u8]) -> Result<(), StoreError>;

    /// Records the path used by subsequent [`save`](ConfigurationManager::save)
    /// and [`load`](ConfigurationManager::load) calls.  Performs no I/O.
    fn set_file_name(&mut self, path: PathBuf);

    /// Returns the bound file path, if any.
    fn file_name(&self) -> Option<&Path>;

    /// Writes the mapping to the bound file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoFileBound`] (before any I/O) if no path has been
    /// bound, otherwise any error from [`save_to`](ConfigurationManager::save_to).
    fn save(&self) -> Result<(), StoreError> {
        let path = self.file_name().ok_or(StoreError::NoFileBound)?;
        self.save_to(path)
    }

    /// Replaces the mapping with the contents of the bound file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoFileBound`] (before any I/O) if no path has been
    /// bound, otherwise any error from [`load_from`](ConfigurationManager::load_from).
    fn load(&mut self) -> Result<(), StoreError> {
        let path = self
            .file_name()
            .ok_or(StoreError::NoFileBound)?
            .to_path_buf();
        self.load_from(&path)
    }

    /// Writes the mapping to `path`, overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialize`] if encoding fails (nothing is written)
    /// or [`StoreError::Io`] if the write fails.
    fn save_to(&self, path: &Path) -> Result<(), StoreError> {
        let json = self.to_json()?;
        persistence::write_file(path, json.as_bytes())
    }

    /// Replaces the mapping with the JSON object stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be read or
    /// [`StoreError::Parse`] if its contents are not a JSON object.  The
    /// mapping is unchanged on either failure.
    fn load_from(&mut self, path: &Path) -> Result<(), StoreError> {
        let bytes = persistence::read_file(path)?;
        self.from_json_bytes(&bytes)
    }
}
