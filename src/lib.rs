//! Bounded file retention for directories of timestamped files.
//!
//! Given a source directory, a path-filter regex and a keep-count, falx
//! computes which files are recent enough to keep, deletes the rest, and
//! reports what it did (or would do, under dry-run). "Recency" is the
//! lexicographic order of the full path, which lines up with chronological
//! order for the timestamped filenames this tool is meant for.
//!
//! The library exposes the whole pipeline so it can be driven and tested
//! without spawning the binary:
//!
//! 1. [`rotator::scan`] lists and filters the directory
//! 2. [`rotator::Partition::plan`] splits the listing into keep/delete sets
//! 3. [`rotator::report::render`] formats the plan for humans
//! 4. [`rotator::apply`] executes the deletions (best-effort, skippable)

pub mod config;
pub mod error;
pub mod rotator;

#[cfg(test)]
mod tests;

pub use config::RotationConfig;
pub use error::RotateError;
