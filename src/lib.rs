//! Doc-ID traceability between documentation and source code
//!
//! Documentation declares behaviours with `<!-- Doc-ID: ABC-DEF-0001-A -->`
//! markers and code claims to implement them with `@shirushi ABC-DEF-0001-A`
//! comments. This crate finds both, cross-references them, and reports which
//! declarations are implemented, which are not, and which references point at
//! nothing.

pub mod domain;
pub use domain::{
    CheckOutcome, Config, Declaration, DocId, Implementation, Marker, Occurrence, Reference,
    TraceReport,
};

/// Filesystem scanning of documentation and source trees.
pub mod storage;
pub use storage::trace;

pub mod render;
