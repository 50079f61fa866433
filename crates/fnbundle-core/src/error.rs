//! Error types for bundle packaging operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `BundleError`.
pub type Result<T> = std::result::Result<T, BundleError>;

/// Errors that can occur while packing a deployment bundle.
///
/// All errors surface synchronously to the caller of the packing
/// operation that hit them; nothing is retried or deferred. After a
/// failure mid-archive the writer is in an undefined partial state and
/// should be discarded.
#[derive(Error, Debug)]
pub enum BundleError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Source location does not exist.
    #[error("source not found: {path}")]
    SourceNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// Source is neither a directory nor a regular file.
    #[error("not a regular file: {path}")]
    NotRegularFile {
        /// The offending path.
        path: PathBuf,
    },

    /// A directly named file carries a source-code extension and the
    /// all-files override was not set.
    #[error("source file excluded from bundle: {path}")]
    ExcludedSource {
        /// The excluded path.
        path: PathBuf,
    },

    /// Entry path cannot be represented in the archive.
    #[error("path is not valid UTF-8: {path}")]
    NonUnicodePath {
        /// The unrepresentable path.
        path: PathBuf,
    },

    /// Directory traversal failed.
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// The archive writer rejected an entry.
    #[error("archive write failed: {0}")]
    Archive(#[from] zip::result::ZipError),
}

impl BundleError {
    /// Returns `true` if this error is a packaging-policy rejection the
    /// caller can override, as opposed to an environmental failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnbundle_core::BundleError;
    /// use std::path::PathBuf;
    ///
    /// let err = BundleError::ExcludedSource {
    ///     path: PathBuf::from("handler.go"),
    /// };
    /// assert!(err.is_policy());
    ///
    /// let err = BundleError::SourceNotFound {
    ///     path: PathBuf::from("missing"),
    /// };
    /// assert!(!err.is_policy());
    /// ```
    #[must_use]
    pub const fn is_policy(&self) -> bool {
        matches!(self, Self::ExcludedSource { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BundleError::SourceNotFound {
            path: PathBuf::from("static/missing"),
        };
        assert_eq!(err.to_string(), "source not found: static/missing");

        let err = BundleError::NotRegularFile {
            path: PathBuf::from("/dev/null"),
        };
        assert!(err.to_string().contains("not a regular file"));

        let err = BundleError::ExcludedSource {
            path: PathBuf::from("main.go"),
        };
        assert!(err.to_string().contains("excluded"));
        assert!(err.to_string().contains("main.go"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BundleError = io_err.into();
        assert!(matches!(err, BundleError::Io(_)));
    }

    #[test]
    fn test_is_policy() {
        let err = BundleError::ExcludedSource {
            path: PathBuf::from("lib.c"),
        };
        assert!(err.is_policy());

        let err = BundleError::NotRegularFile {
            path: PathBuf::from("sock"),
        };
        assert!(!err.is_policy());

        let io_err = std::io::Error::other("boom");
        let err: BundleError = io_err.into();
        assert!(!err.is_policy());
    }
}
