//! Filesystem scanning for Doc-ID markers
//!
//! Walks a directory tree, selects files by extension, and extracts markers
//! from each file. Files that cannot be read as UTF-8 text are skipped so that
//! one bad file never aborts a run.

use std::path::{Component, Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::domain::{Config, Marker, Occurrence, TraceReport};

/// Scan the configured directories and cross-reference the results.
///
/// A directory that does not exist is reported with a warning and
/// contributes no markers.
#[must_use]
pub fn trace(config: &Config) -> TraceReport {
    let declarations = scan_dir(
        "Documentation",
        config.docs_dir(),
        config.doc_extensions(),
        Marker::Declaration,
    );
    let references = scan_dir(
        "Source",
        config.src_dir(),
        config.code_extensions(),
        Marker::Reference,
    );
    TraceReport::analyze(declarations, references)
}

fn scan_dir(label: &str, dir: &Path, extensions: &[String], marker: Marker) -> Vec<Occurrence> {
    if !dir.exists() {
        tracing::warn!("{label} directory does not exist: {}", dir.display());
        return Vec::new();
    }
    scan(dir, report_base(dir), extensions, marker)
}

/// Scan `root` for markers of the given kind.
///
/// Only files whose extension appears in `extensions` are read. Files are
/// visited grouped by extension, in the order the extensions are given, and
/// by path within each group. Reported paths are relative to `base`; a file
/// outside `base` is reported with its full path.
#[must_use]
pub fn scan(root: &Path, base: &Path, extensions: &[String], marker: Marker) -> Vec<Occurrence> {
    let mut occurrences = Vec::new();

    for path in collect_paths(root, extensions) {
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!("Skipping unreadable file {}: {e}", path.display());
                continue;
            }
        };

        let file = relative_to(&path, base);
        occurrences.extend(
            marker
                .extract(&content)
                .into_iter()
                .map(|m| Occurrence::new(m.id, file.clone(), m.line)),
        );
    }

    tracing::info!(
        "Found {} {:?} markers under {}",
        occurrences.len(),
        marker,
        root.display()
    );
    occurrences
}

/// Collect the files under `root` with one of the given extensions.
///
/// Entries that cannot be read (for example, directories without read
/// permission) are skipped. A symlink to a file is collected; symlinked
/// directories are not descended into.
fn collect_paths(root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let mut paths: Vec<(usize, PathBuf)> = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("Skipping directory entry: {e}");
                None
            }
        })
        .filter(is_file)
        .filter_map(|entry| {
            let rank = extension_rank(entry.path(), extensions)?;
            Some((rank, entry.into_path()))
        })
        .collect();

    // Stable, so walk order is kept within each extension.
    paths.sort_by_key(|(rank, _)| *rank);
    paths.into_iter().map(|(_, path)| path).collect()
}

fn is_file(entry: &DirEntry) -> bool {
    if entry.file_type().is_file() {
        return true;
    }
    if !entry.path_is_symlink() {
        return false;
    }
    match std::fs::metadata(entry.path()) {
        Ok(metadata) => metadata.is_file(),
        Err(e) => {
            tracing::debug!("Skipping broken symlink {}: {e}", entry.path().display());
            false
        }
    }
}

fn extension_rank(path: &Path, extensions: &[String]) -> Option<usize> {
    let extension = path.extension()?.to_str()?;
    extensions.iter().position(|e| e == extension)
}

fn relative_to(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base)
        .unwrap_or(path)
        .components()
        .skip_while(|c| matches!(c, Component::CurDir))
        .collect()
}

/// The base directory that scan results are reported relative to.
///
/// This is the parent of the scanned directory, so a file under `docs/` is
/// reported as `docs/...`.
#[must_use]
pub fn report_base(root: &Path) -> &Path {
    root.parent().unwrap_or(root)
}
