//! Rotation configuration.
//!
//! A single value object carries everything one pass needs. The binary
//! builds it from CLI flags; tests build it directly. Nothing here touches
//! the filesystem — validation of the source path happens at scan time.

use std::path::PathBuf;

/// Default number of most-recent matching files to retain.
pub const DEFAULT_KEEP: usize = 4;

/// Default path filter: match every file in the source directory.
pub const DEFAULT_PATTERN: &str = ".*";

/// Configuration for one rotation pass.
#[derive(Debug, Clone)]
pub struct RotationConfig {
    /// Directory to scan. Only its top level is considered.
    pub source: PathBuf,

    /// Regex applied to each file's full path; a match anywhere in the
    /// path includes the file in the rotation.
    pub pattern: String,

    /// Number of most-recent matching files to keep.
    pub keep: usize,

    /// Plan and report without deleting anything.
    pub dry_run: bool,

    /// Suppress everything except fatal errors.
    pub silent: bool,
}

impl RotationConfig {
    /// Build a config with defaults for everything but the source directory.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            pattern: DEFAULT_PATTERN.to_string(),
            keep: DEFAULT_KEEP,
            dry_run: false,
            silent: false,
        }
    }
}

/// Resolve a raw `--keep` value to a retention count.
///
/// The original tool accepted any integer-looking string and silently fell
/// back to the default otherwise; that leniency is preserved. Negative
/// values parse but are clamped to zero rather than inheriting the
/// undefined slicing behavior they had upstream.
pub fn parse_keep(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_KEEP;
    };

    match raw.trim().parse::<i64>() {
        Ok(n) if n < 0 => {
            tracing::warn!(raw = %raw, "negative --keep clamped to 0");
            0
        }
        Ok(n) => n as usize,
        Err(_) => {
            tracing::warn!(
                raw = %raw,
                default = DEFAULT_KEEP,
                "--keep is not an integer, using default"
            );
            DEFAULT_KEEP
        }
    }
}
