//! Output formats for a [`TraceReport`](crate::TraceReport).
//!
//! - [`text`] renders the human-readable summary with pipe tables.
//! - [`json`] builds the machine-readable document written by `--output`.

/// JSON report document.
pub mod json;
/// Human-readable text report.
pub mod text;

pub use json::JsonReport;
pub use text::write_report;
