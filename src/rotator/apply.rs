//! Deletion execution.
//!
//! Deletions are independent, best-effort operations: one locked or
//! permission-denied file must not block rotation of the rest, and a file
//! that vanished since the scan is treated as already rotated. There is no
//! rollback.

use std::{io::ErrorKind, path::PathBuf};

/// What happened (or would happen) to each file slated for deletion.
#[derive(Debug, Default)]
pub struct ApplyReport {
    /// Files actually deleted, or listed for deletion under dry-run.
    pub deleted: Vec<PathBuf>,

    /// Files whose deletion failed, with the error.
    pub failed: Vec<(PathBuf, std::io::Error)>,

    /// Files already gone at apply time (raced with an external process).
    pub vanished: usize,

    /// Whether this was a dry run: `deleted` lists intent, not effect.
    pub dry_run: bool,
}

impl ApplyReport {
    /// Number of files removed (or that would be removed under dry-run).
    pub fn total_removed(&self) -> usize {
        self.deleted.len()
    }

    /// Check if any deletion failed.
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Delete the planned files in order, skip-and-continue on failure.
///
/// Under dry-run no filesystem mutation occurs; every still-present file is
/// reported as it would have been deleted. Failures never abort the batch
/// and never become process errors.
pub fn apply(to_delete: &[PathBuf], dry_run: bool) -> ApplyReport {
    let mut report = ApplyReport {
        dry_run,
        ..ApplyReport::default()
    };

    for path in to_delete {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "file vanished before deletion, skipping");
            report.vanished += 1;
            continue;
        }

        if dry_run {
            report.deleted.push(path.clone());
            continue;
        }

        match std::fs::remove_file(path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "deleted");
                report.deleted.push(path.clone());
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                report.vanished += 1;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to delete file");
                report.failed.push((path.clone(), e));
            }
        }
    }

    report
}
