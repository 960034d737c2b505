use std::io::{self, Write};

use crate::domain::{Implementation, TraceReport};

/// Number of code locations shown per implemented Doc-ID.
const MAX_PREVIEW: usize = 3;

const RULE_WIDTH: usize = 60;

/// Write the human-readable traceability report.
///
/// Sections with no entries are omitted.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_report<W: Write>(report: &TraceReport, out: &mut W) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "Traceability Report")?;
    writeln!(out, "{rule}")?;

    writeln!(out)?;
    writeln!(out, "## Summary")?;
    writeln!(out, "- Total Doc-IDs: {}", report.declarations().len())?;
    writeln!(
        out,
        "- With code references: {} ({:.1}%)",
        report.implemented().len(),
        report.coverage()
    )?;
    writeln!(
        out,
        "- Without code references: {}",
        report.unimplemented().len()
    )?;
    writeln!(out, "- Orphaned references: {}", report.orphaned().len())?;

    if !report.implemented().is_empty() {
        writeln!(out)?;
        writeln!(out, "## ✅ Implemented ({})", report.implemented().len())?;
        writeln!(out, "| Doc-ID | Document | Code references |")?;
        writeln!(out, "|--------|----------|-----------------|")?;
        for implementation in report.implemented() {
            writeln!(
                out,
                "| {} | {} | {} |",
                implementation.declaration.id,
                implementation.declaration.location(),
                preview(implementation)
            )?;
        }
    }

    if !report.unimplemented().is_empty() {
        writeln!(out)?;
        writeln!(out, "## ⚠️ Not implemented ({})", report.unimplemented().len())?;
        writeln!(out, "| Doc-ID | Document |")?;
        writeln!(out, "|--------|----------|")?;
        for declaration in report.unimplemented() {
            writeln!(out, "| {} | {} |", declaration.id, declaration.location())?;
        }
    }

    if !report.orphaned().is_empty() {
        writeln!(out)?;
        writeln!(out, "## ❌ Orphaned references ({})", report.orphaned().len())?;
        writeln!(out, "| Location | Doc-ID |")?;
        writeln!(out, "|----------|--------|")?;
        for reference in report.orphaned() {
            writeln!(out, "| {} | {} |", reference.location(), reference.id)?;
        }
    }

    Ok(())
}

fn preview(implementation: &Implementation) -> String {
    let references = &implementation.references;
    let mut cell = references
        .iter()
        .take(MAX_PREVIEW)
        .map(|r| r.location().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if references.len() > MAX_PREVIEW {
        cell.push_str(&format!(" (+{} more)", references.len() - MAX_PREVIEW));
    }
    cell
}
