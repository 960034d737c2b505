use std::{fmt, path::PathBuf};

use super::DocId;

/// A Doc-ID found at a specific location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// The identifier value.
    pub id: DocId,
    /// Path of the file, relative to the scan base.
    pub file: PathBuf,
    /// 1-based line number.
    pub line: usize,
}

/// A Doc-ID declared in documentation.
pub type Declaration = Occurrence;

/// A Doc-ID referenced from source code.
pub type Reference = Occurrence;

impl Occurrence {
    /// Creates a new occurrence.
    #[must_use]
    pub fn new(id: DocId, file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            id,
            file: file.into(),
            line,
        }
    }

    /// Displays the location as `file:line`.
    #[must_use]
    pub const fn location(&self) -> Location<'_> {
        Location(self)
    }
}

/// Displays an [`Occurrence`] as `file:line`.
#[derive(Debug, Clone, Copy)]
pub struct Location<'a>(&'a Occurrence);

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.0.file.display(), self.0.line)
    }
}
