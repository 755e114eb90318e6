//! The configuration store and its capability interface.
//!
//! The store is deliberately small: a sorted map of string keys to JSON
//! values plus an optional bound file path.  Every operation runs to
//! completion before returning and the store does no internal locking, so
//! callers that share a store across threads wrap it in their own lock
//! (e.g. `Mutex<ConfigStore>`).

pub mod config_store;
pub mod error;
pub mod manager;

pub use config_store::ConfigStore;
pub use error::StoreError;
pub use manager::ConfigurationManager;
