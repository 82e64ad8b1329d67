//! Directory scan: list, filter, order.

use std::{cmp::Ordering, path::Path, path::PathBuf};

use regex::Regex;

use crate::{config::RotationConfig, error::RotateError};

/// Recency ordering: byte-wise lexicographic comparison of the full path.
///
/// This is the tool's sole proxy for file age. Filenames with embedded
/// ISO-8601 timestamps (or anything else that sorts chronologically) make
/// it line up with true recency; the tool never reads modification times.
/// Swapping this function for an mtime comparison would change the recency
/// model without touching the partition logic.
pub fn recency_order(a: &Path, b: &Path) -> Ordering {
    a.as_os_str()
        .as_encoded_bytes()
        .cmp(b.as_os_str().as_encoded_bytes())
}

/// List the regular files directly inside the source directory whose full
/// path matches the configured pattern, sorted oldest-first by
/// [`recency_order`].
///
/// Subdirectories are never entered and never listed themselves; symlinks
/// count as whatever they resolve to. Entries that disappear or error
/// mid-listing are skipped; only a source that is missing, not a
/// directory, or unreadable is fatal.
pub fn scan(config: &RotationConfig) -> Result<Vec<PathBuf>, RotateError> {
    if !config.source.is_dir() {
        return Err(RotateError::InvalidSource(config.source.clone()));
    }

    let pattern = Regex::new(&config.pattern)?;

    let entries = std::fs::read_dir(&config.source).map_err(|source| RotateError::ReadDir {
        path: config.source.clone(),
        source,
    })?;

    let mut matched = Vec::new();
    for entry in entries {
        let Ok(entry) = entry else {
            continue;
        };
        let path = entry.path();

        // Follows symlinks: a link to a regular file rotates like the file
        // itself; directories and dangling links are skipped.
        match path.metadata() {
            Ok(meta) if meta.is_file() => {}
            _ => continue,
        }

        if pattern.is_match(&path.to_string_lossy()) {
            matched.push(path);
        }
    }

    matched.sort_by(|a, b| recency_order(a, b));

    tracing::debug!(
        source = %config.source.display(),
        pattern = %config.pattern,
        matched = matched.len(),
        "scanned source directory"
    );

    Ok(matched)
}
