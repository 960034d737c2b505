//! Domain models for Doc-ID traceability.
//!
//! This module contains the core domain types including Doc-IDs, the markers
//! that carry them, and the cross-reference report.

/// Doc-ID types and parsing.
pub mod doc_id;
pub use doc_id::{DocId, Error as DocIdError};

mod config;
pub use config::{Config, LoadError as ConfigLoadError};

pub mod marker;
pub use marker::{Marker, MarkerMatch};

mod occurrence;
pub use occurrence::{Declaration, Location, Occurrence, Reference};

pub mod report;
pub use report::{CheckOutcome, Implementation, TraceReport};
