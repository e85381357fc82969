//! Error types for the strict (`try_*`) helper variants.

use std::path::PathBuf;

use thiserror::Error;

/// Degenerate input rejected by a strict string operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrError {
    #[error("delimiter must not be empty")]
    EmptyDelimiter,
    #[error("replacement lists differ in length: {from} patterns, {to} replacements")]
    MismatchedLengths { from: usize, to: usize },
    #[error("replacement lists are empty")]
    EmptyPatterns,
}

/// Failure of a strict filesystem operation.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("{}: no such file", path.display())]
    NotFound { path: PathBuf },
    #[error("{}: refusing to write empty data", path.display())]
    EmptyData { path: PathBuf },
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classify an I/O error for `path`, splitting out the not-found case.
    #[must_use]
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Returns true if the failure means the path does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_splits_not_found() {
        let err = FsError::from_io("missing.bin", std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(err.is_not_found());

        let err = FsError::from_io(
            "locked.bin",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(!err.is_not_found());
        assert!(err.to_string().starts_with("locked.bin: "));
    }

    #[test]
    fn test_str_error_messages() {
        let err = StrError::MismatchedLengths { from: 3, to: 2 };
        assert_eq!(
            err.to_string(),
            "replacement lists differ in length: 3 patterns, 2 replacements"
        );
        assert_eq!(StrError::EmptyDelimiter.to_string(), "delimiter must not be empty");
    }
}
