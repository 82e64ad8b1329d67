//! Consolidated test modules.
//!
//! End-to-end rotation scenarios that exercise the whole pipeline against
//! real temporary directories.
