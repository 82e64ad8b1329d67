//! Rotation errors.
//!
//! Only configuration-level problems are errors: a bad source directory or
//! an uncompilable pattern stops the run before any file is touched.
//! Per-file deletion failures are operational data, collected in the
//! [`ApplyReport`](crate::rotator::ApplyReport) instead of propagated here.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RotateError {
    #[error("source path does not exist or is not a directory: {0}")]
    InvalidSource(PathBuf),

    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}
