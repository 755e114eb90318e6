//! Error type for configuration store operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`crate::ConfigurationManager`] operations.
///
/// None of these are fatal: the store remains usable after any of them, and
/// a failed parse or load leaves the existing mapping untouched.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The input text is not valid JSON, or does not decode to an object.
    #[error("failed to parse configuration JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// A stored value could not be encoded as JSON.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A parameterless save or load was invoked before a file was bound.
    #[error("no file bound to configuration store")]
    NoFileBound,

    /// A file system I/O error occurred.
    #[error("cannot access store file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Returns the underlying I/O error kind, if this is an I/O failure.
    ///
    /// Handy for callers that treat a missing file as "first run":
    ///
    /// ```rust
    /// use confstore_core::{ConfigStore, ConfigurationManager};
    /// use std::io::ErrorKind;
    /// use std::path::Path;
    ///
    /// let mut store = ConfigStore::new();
    /// let err = store.load_from(Path::new("/nonexistent/dir/config.json")).unwrap_err();
    /// assert_eq!(err.io_kind(), Some(ErrorKind::NotFound));
    /// ```
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            StoreError::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
