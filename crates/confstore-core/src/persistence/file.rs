//! Whole-file read and write helpers.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::store::error::StoreError;

/// Permission bits applied to newly created files on Unix: owner read-write,
/// group and other read-only.
pub const FILE_MODE: u32 = 0o644;

/// Writes `contents` to `path`, replacing whatever the file held before.
///
/// The file is created if it does not exist (with [`FILE_MODE`] on Unix,
/// subject to the process umask).  The parent directory must already exist.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if the file cannot be opened or written.
pub fn write_file(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    let mut file = options.open(path).map_err(io_err)?;
    file.write_all(contents).map_err(io_err)?;

    debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Reads the whole file at `path` as raw bytes.
///
/// Content is not inspected here; decoding (UTF-8 included) belongs to the
/// JSON parser.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if the file cannot be read.
pub fn read_file(path: &Path) -> Result<Vec<u8>, StoreError> {
    let bytes = std::fs::read(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
