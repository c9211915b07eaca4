//! Error types for reqscan operations.
//!
//! This module defines [`ReqscanError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The only fatal condition is the project-root precondition; everything
//!   downstream of it degrades to a logged warning
//! - Use `ReqscanError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `ReqscanError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for reqscan operations.
#[derive(Debug, Error)]
pub enum ReqscanError {
    /// Supplied project directory does not exist.
    #[error("Project directory not found: {path}")]
    ProjectDirNotFound { path: PathBuf },

    /// Supplied project path exists but is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Failed to write the generated manifest.
    #[error("Failed to write manifest at {path}: {message}")]
    ManifestWriteError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for reqscan operations.
pub type Result<T> = std::result::Result<T, ReqscanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_dir_not_found_displays_path() {
        let err = ReqscanError::ProjectDirNotFound {
            path: PathBuf::from("/missing/project"),
        };
        assert!(err.to_string().contains("/missing/project"));
    }

    #[test]
    fn not_a_directory_displays_path() {
        let err = ReqscanError::NotADirectory {
            path: PathBuf::from("/etc/passwd"),
        };
        assert!(err.to_string().contains("/etc/passwd"));
    }

    #[test]
    fn manifest_write_error_displays_path_and_message() {
        let err = ReqscanError::ManifestWriteError {
            path: PathBuf::from("/proj/requirements.txt"),
            message: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/proj/requirements.txt"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ReqscanError = io_err.into();
        assert!(matches!(err, ReqscanError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(ReqscanError::NotADirectory {
                path: PathBuf::from("/tmp/file"),
            })
        }
        assert!(returns_error().is_err());
    }
}
