//! Persistence: whole-file storage of serialized configuration.
//!
//! This module is a thin adapter between the store and the file system:
//!
//! - Writing overwrites the whole file in place (create + truncate).  There
//!   is no append, no atomic rename and no locking, so a failure part-way
//!   through a write can leave a truncated file behind.
//! - Reading returns the whole file as text.
//!
//! Keeping file access here means the store itself never touches
//! `std::fs` directly.

pub mod file;

pub use file::{read_file, write_file, FILE_MODE};
