//! Thin wrappers over the host filesystem.
//!
//! The lenient functions mirror a "best effort" contract: reads fall back to
//! empty content and writes report success as a `bool`. The `try_*` variants
//! return [`FsError`] instead.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::FsError;

/// How [`write_file`] opens an existing file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteMode {
    /// Add to the end of the file.
    Append,
    /// Replace the file contents.
    #[default]
    Truncate,
}

/// Reads the whole file as text, replacing invalid UTF-8 sequences.
///
/// Returns `""` when the file cannot be read.
#[must_use]
pub fn read_file(path: impl AsRef<Path>) -> String {
    try_read_file(path).unwrap_or_default()
}

/// Reads the whole file as text, reporting why it could not be read.
pub fn try_read_file(path: impl AsRef<Path>) -> Result<String, FsError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|err| FsError::from_io(path, err))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}

/// Writes `data` to `path`, creating the file if needed.
///
/// Returns `false` if `data` is empty or the file cannot be written.
pub fn write_file(path: impl AsRef<Path>, data: impl AsRef<[u8]>, mode: WriteMode) -> bool {
    try_write_file(path, data, mode).is_ok()
}

/// Strict [`write_file`].
pub fn try_write_file(
    path: impl AsRef<Path>,
    data: impl AsRef<[u8]>,
    mode: WriteMode,
) -> Result<(), FsError> {
    let path = path.as_ref();
    let data = data.as_ref();
    if data.is_empty() {
        return Err(FsError::EmptyData {
            path: path.to_path_buf(),
        });
    }

    let mut options = OpenOptions::new();
    options.create(true);
    match mode {
        WriteMode::Append => options.append(true),
        WriteMode::Truncate => options.write(true).truncate(true),
    };

    let mut file = options
        .open(path)
        .map_err(|err| FsError::from_io(path, err))?;
    file.write_all(data)
        .and_then(|()| file.flush())
        .map_err(|err| FsError::from_io(path, err))
}

/// Appends `data` to the file at `path`.
pub fn append_file(path: impl AsRef<Path>, data: impl AsRef<[u8]>) -> bool {
    write_file(path, data, WriteMode::Append)
}

/// Replaces the contents of the file at `path` with `data`.
pub fn overwrite_file(path: impl AsRef<Path>, data: impl AsRef<[u8]>) -> bool {
    write_file(path, data, WriteMode::Truncate)
}

/// Returns true if something exists at `path`.
#[must_use]
pub fn path_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Returns the text after the last `.` of the file name, or `""`.
///
/// `"./to_file_write.bin"` gives `"bin"`, `"archive.tar.gz"` gives `"gz"`.
#[must_use]
pub fn file_extension(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| name.rsplit_once('.').map(|(_, ext)| ext.to_string()))
        .unwrap_or_default()
}

/// Compares the extension of `path` with `ext`, ignoring ASCII case and a
/// leading `.` on `ext`.
#[must_use]
pub fn has_extension(path: impl AsRef<Path>, ext: &str) -> bool {
    let wanted = ext.strip_prefix('.').unwrap_or(ext);
    file_extension(path).eq_ignore_ascii_case(wanted)
}
