//! Whole-file byte reads and magic-number checks.

use std::path::Path;

use crate::error::FsError;

/// Reads the whole file at `path` into memory.
///
/// Returns an empty buffer when the file cannot be opened or read. Use
/// [`try_read_binary`] to tell a missing file apart from an empty one.
#[must_use]
pub fn read_binary(path: impl AsRef<Path>) -> Vec<u8> {
    std::fs::read(path).unwrap_or_default()
}

/// Reads the whole file at `path`, reporting why it could not be read.
pub fn try_read_binary(path: impl AsRef<Path>) -> Result<Vec<u8>, FsError> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|err| FsError::from_io(path, err))
}

/// Returns true if `bytes` starts with `magic`.
///
/// An empty `magic` never matches, and a buffer shorter than `magic` never
/// matches.
#[must_use]
pub fn has_magic_prefix(bytes: &[u8], magic: &[u8]) -> bool {
    !magic.is_empty() && bytes.starts_with(magic)
}
