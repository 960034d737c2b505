use std::path::Path;

use serde::Serialize;

use crate::domain::{DocId, Occurrence, TraceReport};

/// The machine-readable form of a [`TraceReport`].
///
/// Unlike the text report, every reference of an implemented Doc-ID is
/// included.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    summary: Summary,
    implemented: Vec<ImplementedEntry<'a>>,
    not_implemented: Vec<Entry<'a>>,
    orphan_refs: Vec<Entry<'a>>,
}

#[derive(Debug, Serialize)]
struct Summary {
    total_doc_ids: usize,
    implemented: usize,
    not_implemented: usize,
    orphan_refs: usize,
    coverage: f64,
}

#[derive(Debug, Serialize)]
struct ImplementedEntry<'a> {
    doc_id: &'a DocId,
    doc_file: &'a Path,
    doc_line: usize,
    code_refs: Vec<CodeRef<'a>>,
}

#[derive(Debug, Serialize)]
struct CodeRef<'a> {
    file: &'a Path,
    line: usize,
}

#[derive(Debug, Serialize)]
struct Entry<'a> {
    doc_id: &'a DocId,
    file: &'a Path,
    line: usize,
}

impl<'a> JsonReport<'a> {
    /// Build the JSON document for a report.
    #[must_use]
    pub fn new(report: &'a TraceReport) -> Self {
        let summary = Summary {
            total_doc_ids: report.declarations().len(),
            implemented: report.implemented().len(),
            not_implemented: report.unimplemented().len(),
            orphan_refs: report.orphaned().len(),
            coverage: report.coverage(),
        };

        let implemented = report
            .implemented()
            .iter()
            .map(|implementation| ImplementedEntry {
                doc_id: &implementation.declaration.id,
                doc_file: &implementation.declaration.file,
                doc_line: implementation.declaration.line,
                code_refs: implementation
                    .references
                    .iter()
                    .map(|r| CodeRef {
                        file: &r.file,
                        line: r.line,
                    })
                    .collect(),
            })
            .collect();

        let entry = |o: &'a Occurrence| Entry {
            doc_id: &o.id,
            file: &o.file,
            line: o.line,
        };

        Self {
            summary,
            implemented,
            not_implemented: report.unimplemented().iter().map(entry).collect(),
            orphan_refs: report.orphaned().iter().map(entry).collect(),
        }
    }

    /// Serialize as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if a path cannot be represented as UTF-8.
    pub fn to_string_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
