//! # confstore-core
//!
//! In-memory key-value configuration store with JSON (de)serialization and
//! optional file persistence.
//!
//! # Overview
//!
//! - **`store`** – The [`ConfigStore`] itself, the [`ConfigurationManager`]
//!   capability trait it implements, and the [`StoreError`] taxonomy.
//!
//! - **`persistence`** – Whole-file read and write helpers used by the
//!   save/load operations.  Files are overwritten in place (no append, no
//!   atomic rename) and created with mode `0644` on Unix.
//!
//! Values are dynamic JSON values ([`serde_json::Value`]), so a store can hold
//! strings, numbers, booleans, null, arrays and nested objects side by side.
//!
//! # Example
//!
//! ```rust
//! use confstore_core::{ConfigStore, ConfigurationManager};
//! use serde_json::json;
//!
//! let mut store = ConfigStore::new();
//! assert!(store.set_value("port", json!(8080)));
//!
//! // `set_value` never overwrites an existing key.
//! assert!(!store.set_value("port", json!(9090)));
//! assert_eq!(store.get_value("port"), Some(&json!(8080)));
//! ```

pub mod persistence;
pub mod store;

// Re-export the most-used types at the crate root so callers can write
// `confstore_core::ConfigStore` instead of `confstore_core::store::config_store::ConfigStore`.
pub use serde_json::Value;
pub use store::config_store::ConfigStore;
pub use store::error::StoreError;
pub use store::manager::ConfigurationManager;
