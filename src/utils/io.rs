//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read file contents with standardized error handling.
///
/// Wraps `fs::read_to_string` with consistent `Error::internal_io` formatting.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Write content to file with standardized error handling.
///
/// Wraps `fs::write` with consistent `Error::internal_io` formatting. The
/// existing file is truncated and rewritten through its own path, so
/// symlinks are followed and permissions are kept.
pub fn write_file(path: &Path, content: &str, operation: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Rename a file or directory with standardized error handling.
pub fn rename_path(from: &Path, to: &Path, operation: &str) -> Result<()> {
    fs::rename(from, to)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}
