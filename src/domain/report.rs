//! Cross-referencing of declarations against references.

use std::collections::{HashMap, HashSet};

use super::{Declaration, DocId, Reference};

/// A declaration together with every reference to its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Implementation {
    /// The documented declaration.
    pub declaration: Declaration,
    /// All references sharing the declaration's identifier, in scan order.
    pub references: Vec<Reference>,
}

/// The result of cross-referencing documentation against code.
///
/// Every declaration lands in exactly one of `implemented` or
/// `unimplemented`. Every reference is either grouped under an implemented
/// declaration or listed in `orphaned`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceReport {
    declarations: Vec<Declaration>,
    references: Vec<Reference>,
    implemented: Vec<Implementation>,
    unimplemented: Vec<Declaration>,
    orphaned: Vec<Reference>,
}

/// Verdict of a CI check over a [`TraceReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Every declaration is implemented and no reference is orphaned.
    Passed,
    /// Some declarations lack an implementation. Advisory only.
    Warned {
        /// Number of unimplemented declarations.
        unimplemented: usize,
    },
    /// At least one reference points at an undeclared identifier.
    Failed {
        /// Number of orphaned references.
        orphaned: usize,
    },
}

impl CheckOutcome {
    /// Whether the check should fail a CI run.
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl TraceReport {
    /// Partition declarations and references.
    ///
    /// Duplicate declarations of the same identifier are kept and each one is
    /// paired with the full reference group for that identifier.
    #[must_use]
    pub fn analyze(declarations: Vec<Declaration>, references: Vec<Reference>) -> Self {
        let declared: HashSet<&DocId> = declarations.iter().map(|d| &d.id).collect();

        let mut references_by_id: HashMap<&DocId, Vec<Reference>> = HashMap::new();
        for reference in &references {
            references_by_id
                .entry(&reference.id)
                .or_default()
                .push(reference.clone());
        }

        let mut implemented = Vec::new();
        let mut unimplemented = Vec::new();
        for declaration in &declarations {
            match references_by_id.get(&declaration.id) {
                Some(group) => implemented.push(Implementation {
                    declaration: declaration.clone(),
                    references: group.clone(),
                }),
                None => unimplemented.push(declaration.clone()),
            }
        }

        let orphaned: Vec<Reference> = references
            .iter()
            .filter(|reference| !declared.contains(&reference.id))
            .cloned()
            .collect();

        tracing::debug!(
            "Analyzed {} declarations and {} references: {} implemented, {} unimplemented, {} orphaned",
            declarations.len(),
            references.len(),
            implemented.len(),
            unimplemented.len(),
            orphaned.len()
        );

        Self {
            declarations,
            references,
            implemented,
            unimplemented,
            orphaned,
        }
    }

    /// All declarations, in scan order.
    #[must_use]
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// All references, in scan order.
    #[must_use]
    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    /// Declarations with at least one reference.
    #[must_use]
    pub fn implemented(&self) -> &[Implementation] {
        &self.implemented
    }

    /// Declarations with no reference.
    #[must_use]
    pub fn unimplemented(&self) -> &[Declaration] {
        &self.unimplemented
    }

    /// References to identifiers that are never declared.
    #[must_use]
    pub fn orphaned(&self) -> &[Reference] {
        &self.orphaned
    }

    /// Percentage of declarations that are implemented (0.0 - 100.0).
    ///
    /// The denominator is the number of declaration records, so an
    /// identifier declared in two documents counts twice.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn coverage(&self) -> f64 {
        if self.declarations.is_empty() {
            return 0.0;
        }
        self.implemented.len() as f64 / self.declarations.len() as f64 * 100.0
    }

    /// CI verdict: orphaned references fail, missing implementations warn.
    #[must_use]
    pub fn check(&self) -> CheckOutcome {
        if !self.orphaned.is_empty() {
            CheckOutcome::Failed {
                orphaned: self.orphaned.len(),
            }
        } else if !self.unimplemented.is_empty() {
            CheckOutcome::Warned {
                unimplemented: self.unimplemented.len(),
            }
        } else {
            CheckOutcome::Passed
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::domain::Occurrence;

    fn occurrence(id: &str, file: &str, line: usize) -> Occurrence {
        Occurrence::new(DocId::try_from(id).unwrap(), file, line)
    }

    #[test]
    fn declaration_matched_by_reference_in_other_file() {
        let declaration = occurrence("ABC-DEF-0001-A", "docs/login.md", 3);
        let reference = occurrence("ABC-DEF-0001-A", "src/login.rs", 10);

        let report = TraceReport::analyze(vec![declaration.clone()], vec![reference.clone()]);

        assert_eq!(
            report.implemented(),
            &[Implementation {
                declaration,
                references: vec![reference],
            }]
        );
        assert!(report.unimplemented().is_empty());
        assert!(report.orphaned().is_empty());
        assert!((report.coverage() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn undeclared_reference_is_orphaned() {
        let reference = occurrence("ABC-DEF-9999-Z", "src/lib.rs", 1);
        let report = TraceReport::analyze(Vec::new(), vec![reference.clone()]);

        assert_eq!(report.orphaned(), &[reference]);
        assert!(report.implemented().is_empty());
        assert_eq!(report.check(), CheckOutcome::Failed { orphaned: 1 });
    }

    #[test]
    fn unreferenced_declaration_only_warns() {
        let declaration = occurrence("ABC-DEF-0003-C", "docs/a.md", 1);
        let report = TraceReport::analyze(vec![declaration.clone()], Vec::new());

        assert_eq!(report.unimplemented(), &[declaration]);
        assert_eq!(report.check(), CheckOutcome::Warned { unimplemented: 1 });
        assert!(!report.check().is_failure());
        assert!(report.coverage().abs() < f64::EPSILON);
    }

    #[test]
    fn duplicate_declarations_share_reference_group_and_inflate_denominator() {
        let first = occurrence("ABC-DEF-0002-B", "docs/a.md", 1);
        let second = occurrence("ABC-DEF-0002-B", "docs/b.md", 7);
        let other = occurrence("ABC-DEF-0005-E", "docs/b.md", 9);
        let reference = occurrence("ABC-DEF-0002-B", "src/main.rs", 4);

        let report = TraceReport::analyze(
            vec![first.clone(), second.clone(), other],
            vec![reference.clone()],
        );

        assert_eq!(report.implemented().len(), 2);
        assert_eq!(report.implemented()[0].declaration, first);
        assert_eq!(report.implemented()[1].declaration, second);
        for implementation in report.implemented() {
            assert_eq!(implementation.references, vec![reference.clone()]);
        }
        // 2 of 3 declaration records, not 1 of 2 distinct identifiers.
        assert!((report.coverage() - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_inputs() {
        let report = TraceReport::analyze(Vec::new(), Vec::new());
        assert!(report.coverage().abs() < f64::EPSILON);
        assert_eq!(report.check(), CheckOutcome::Passed);
    }

    #[test]
    fn every_record_lands_in_exactly_one_partition() {
        let declarations = vec![
            occurrence("ABC-DEF-0001-A", "docs/a.md", 1),
            occurrence("ABC-DEF-0002-B", "docs/a.md", 2),
            occurrence("ABC-DEF-0001-A", "docs/b.md", 1),
            occurrence("XYZ-QRS-0100-D", "docs/b.md", 5),
        ];
        let references = vec![
            occurrence("ABC-DEF-0001-A", "src/a.rs", 1),
            occurrence("ABC-DEF-0001-A", "src/b.rs", 2),
            occurrence("XYZ-QRS-0100-D", "src/b.rs", 3),
            occurrence("ABC-DEF-0404-N", "src/c.rs", 4),
            occurrence("ABC-DEF-0404-N", "src/c.rs", 5),
        ];

        let report = TraceReport::analyze(declarations.clone(), references.clone());

        for declaration in &declarations {
            let in_implemented = report
                .implemented()
                .iter()
                .filter(|i| &i.declaration == declaration)
                .count();
            let in_unimplemented = report
                .unimplemented()
                .iter()
                .filter(|d| *d == declaration)
                .count();
            assert_eq!(in_implemented + in_unimplemented, 1, "{declaration:?}");
        }

        for reference in &references {
            let grouped = report
                .implemented()
                .iter()
                .any(|i| i.references.contains(reference));
            let orphaned = report.orphaned().contains(reference);
            assert!(grouped != orphaned, "{reference:?}");
        }

        assert_eq!(report.implemented()[0].references.len(), 2);
        assert_eq!(report.unimplemented().len(), 1);
        assert_eq!(report.orphaned().len(), 2);
        assert_eq!(report.check(), CheckOutcome::Failed { orphaned: 2 });
    }

    #[test]
    fn inputs_are_retained() {
        let declarations = vec![occurrence("ABC-DEF-0001-A", "docs/a.md", 1)];
        let references = vec![occurrence("ABC-DEF-0002-B", "src/a.rs", 1)];
        let report = TraceReport::analyze(declarations.clone(), references.clone());
        assert_eq!(report.declarations(), declarations.as_slice());
        assert_eq!(report.references(), references.as_slice());
    }

    #[test_case(CheckOutcome::Passed => false; "passed")]
    #[test_case(CheckOutcome::Warned { unimplemented: 3 } => false; "warned")]
    #[test_case(CheckOutcome::Failed { orphaned: 1 } => true; "failed")]
    fn only_orphans_fail_the_check(outcome: CheckOutcome) -> bool {
        outcome.is_failure()
    }
}
