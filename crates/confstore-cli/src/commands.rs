//! Command definitions and execution.
//!
//! Every command runs against an in-memory [`ConfigStore`] and returns an
//! [`Outcome`] describing what to print and whether the store changed.  The
//! caller decides whether to persist; nothing here writes the target file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clap::Subcommand;
use confstore_core::{ConfigStore, ConfigurationManager, StoreError, Value};
use thiserror::Error;
use tracing::{debug, info};

/// Errors produced while executing a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// `get` was asked for a key that is not stored.
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// `set` was asked to write a key that already has a value.
    #[error("key already set: {0} (use --force to replace it)")]
    KeyExists(String),

    /// The underlying store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Sub-commands understood by the `confstore` binary.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Print the value stored under KEY as JSON.
    Get { key: String },

    /// Print `true` if KEY is stored, `false` otherwise.
    Exists { key: String },

    /// Store VALUE under KEY if the key is not already set.
    ///
    /// VALUE is parsed as JSON; anything that is not valid JSON is stored as
    /// a string, so `set name alice` and `set name '"alice"'` are equivalent.
    Set {
        key: String,
        value: String,
        /// Replace an existing value instead of refusing.
        #[arg(long)]
        force: bool,
    },

    /// Remove KEY.
    Delete { key: String },

    /// Print every stored key, one per line.
    List,

    /// Remove every key.
    Clear,

    /// Print the whole configuration as a JSON object.
    Dump,

    /// Replace the whole configuration with the JSON object in SOURCE.
    Import { source: PathBuf },
}

/// Result of executing a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    /// Text to print on stdout, if any.
    pub output: Option<String>,
    /// Whether the store was modified and should be saved.
    pub changed: bool,
}

impl Outcome {
    fn print(output: impl Into<String>) -> Self {
        Self {
            output: Some(output.into()),
            changed: false,
        }
    }

    fn modified(changed: bool) -> Self {
        Self {
            output: None,
            changed,
        }
    }
}

/// Opens the store bound to `path`.
///
/// A missing file is treated as an empty configuration (first run).
///
/// # Errors
///
/// Returns any other I/O error, or [`StoreError::Parse`] when the file does
/// not hold a JSON object.
pub fn open_store(path: &Path) -> Result<ConfigStore, StoreError> {
    let mut store = ConfigStore::with_file_name(path);
    match store.load() {
        Ok(()) => debug!("loaded {} keys from {}", store.len(), path.display()),
        Err(e) if e.io_kind() == Some(ErrorKind::NotFound) => {
            info!("{} does not exist yet, starting empty", path.display());
        }
        Err(e) => return Err(e),
    }
    Ok(store)
}

/// Interprets a command-line value: JSON if it parses, a JSON string otherwise.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Executes `command` against `store`.
///
/// `pretty` selects indented JSON for `get` and `dump` output.
///
/// # Errors
///
/// Returns [`CommandError::KeyNotFound`] for `get` on an absent key,
/// [`CommandError::KeyExists`] for a non-forced `set` on a present key, and
/// [`CommandError::Store`] when a store operation fails.  The store is left
/// unchanged on error.
pub fn execute(
    store: &mut ConfigStore,
    command: &Command,
    pretty: bool,
) -> Result<Outcome, CommandError> {
    match command {
        Command::Get { key } => {
            let value = store
                .get_value(key)
                .ok_or_else(|| CommandError::KeyNotFound(key.clone()))?;
            let encoded = if pretty {
                serde_json::to_string_pretty(value)
            } else {
                serde_json::to_string(value)
            };
            let text = encoded.map_err(StoreError::Serialize)?;
            Ok(Outcome::print(text))
        }
        Command::Exists { key } => Ok(Outcome::print(store.exists(key).to_string())),
        Command::Set { key, value, force } => {
            if store.exists(key) {
                if !force {
                    return Err(CommandError::KeyExists(key.clone()));
                }
                store.delete(key);
            }
            let inserted = store.set_value(key, parse_value(value));
            Ok(Outcome::modified(inserted))
        }
        Command::Delete { key } => Ok(Outcome::modified(store.delete(key))),
        Command::List => {
            let keys: Vec<&str> = store.keys().collect();
            if keys.is_empty() {
                Ok(Outcome::default())
            } else {
                Ok(Outcome::print(keys.join("\n")))
            }
        }
        Command::Clear => {
            let had_keys = !store.is_empty();
            store.clear();
            Ok(Outcome::modified(had_keys))
        }
        Command::Dump => {
            let text = if pretty {
                store.to_json_pretty()?
            } else {
                store.to_json()?
            };
            Ok(Outcome::print(text))
        }
        Command::Import { source } => {
            store.load_from(source)?;
            info!("imported {} keys from {}", store.len(), source.display());
            Ok(Outcome::modified(true))
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
