//! The rotation pipeline: scan, partition, report, apply.
//!
//! Each stage is a standalone function over plain values so the pipeline
//! can be recomposed (the binary prints the report between planning and
//! applying; tests usually skip the report). Nothing persists between
//! passes except the files that survive.

mod apply;
mod partition;
pub mod report;
mod scan;

pub use apply::{ApplyReport, apply};
pub use partition::Partition;
pub use scan::{recency_order, scan};
