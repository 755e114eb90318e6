//! confstore-cli library entry point.
//!
//! Holds the command definitions and their execution against a
//! [`confstore_core::ConfigStore`], so that integration tests in `tests/` and
//! the binary entry point in `main.rs` share the same code.

pub mod commands;

pub use commands::{execute, open_store, parse_value, Command, CommandError, Outcome};
