//! Filesystem access for traceability scans.

pub mod scanner;
pub use scanner::{report_base, scan, trace};
