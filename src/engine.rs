use crate::detect::is_binary_file;
use crate::diagnostics::{Diagnostics, SnapshotEvent};
use crate::error::SnapError;
use crate::filter::ExclusionRules;
use crate::options::SnapshotConfig;
use crate::output::{write_file_section, write_structure};
use crate::tree::push_entry;
use crate::types::{SnapshotSummary, TraversalEntry};
use ignore::WalkBuilder;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
/// Sorted, pruned walk over the input tree. Excluded directories are never
/// descended into.
struct Walker {
    root: PathBuf,
    inner: ignore::Walk,
    rules: Arc<ExclusionRules>,
    finished: bool,
}
impl Walker {
    fn new(root: &Path, rules: &Arc<ExclusionRules>, artifact: Option<&Path>) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        let filter_root = root.to_path_buf();
        let filter_rules = Arc::clone(rules);
        let artifact = artifact.map(Path::to_path_buf);
        // Never called for the root itself; `next` handles that one.
        builder.filter_entry(move |dent| {
            match TraversalEntry::new(&filter_root, dent.path(), is_dir(dent)) {
                Ok(entry) => {
                    !filter_rules.excludes(&entry)
                        && artifact.as_deref() != Some(Path::new(&entry.relative))
                }
                Err(_) => true,
            }
        });
        Self {
            root: root.to_path_buf(),
            inner: builder.build(),
            rules: Arc::clone(rules),
            finished: false,
        }
    }
}
impl Iterator for Walker {
    type Item = Result<TraversalEntry, SnapError>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let dent = match self.inner.next()? {
            Ok(dent) => dent,
            Err(e) => {
                self.finished = true;
                return Some(Err(SnapError::Walk(e)));
            }
        };
        let entry = match TraversalEntry::new(&self.root, dent.path(), is_dir(&dent)) {
            Ok(entry) => entry,
            Err(e) => {
                self.finished = true;
                return Some(Err(e));
            }
        };
        if dent.depth() == 0 && self.rules.excludes(&entry) {
            self.finished = true;
            return None;
        }
        Some(Ok(entry))
    }
}
fn is_dir(dent: &ignore::DirEntry) -> bool {
    dent.file_type().is_some_and(|t| t.is_dir())
}
/// Relative location of the output artifact if it lives inside `root`.
fn artifact_in_tree(root: &Path, output: &Path) -> Option<PathBuf> {
    let root = fs::canonicalize(root).ok()?;
    let output = fs::canonicalize(output).ok()?;
    output.strip_prefix(&root).ok().map(Path::to_path_buf)
}
/// Checks, reads and writes one file. Returns whether its contents were
/// written; per-file failures are reported and skipped.
fn include_file<W: Write + ?Sized>(
    entry: &TraversalEntry,
    out: &mut W,
    diagnostics: &dyn Diagnostics,
) -> Result<bool, SnapError> {
    let rel = entry.relative.as_str();
    diagnostics.record(&SnapshotEvent::Checking(rel));
    match is_binary_file(&entry.path) {
        Ok(false) => {}
        Ok(true) => {
            diagnostics.record(&SnapshotEvent::SkippedBinary(rel));
            return Ok(false);
        }
        Err(error) => {
            diagnostics.record(&SnapshotEvent::CheckFailed {
                path: rel,
                error: &error,
            });
            return Ok(false);
        }
    }
    diagnostics.record(&SnapshotEvent::Reading(rel));
    let content = match fs::read(&entry.path) {
        Ok(content) => content,
        Err(e) => {
            let error = SnapError::io(&entry.path, e);
            diagnostics.record(&SnapshotEvent::ReadFailed {
                path: rel,
                error: &error,
            });
            return Ok(false);
        }
    };
    diagnostics.record(&SnapshotEvent::Writing(rel));
    write_file_section(out, rel, &content)?;
    Ok(true)
}
/// Writes a snapshot of `root` to `out`.
///
/// The tree is walked twice: once to render the structure section, once to
/// stream the contents of every textual file.
///
/// # Errors
///
/// Traversal failures and write failures abort the run. Files that cannot be
/// classified or read are reported to `diagnostics` and skipped.
pub fn generate_snapshot<W: Write + ?Sized>(
    root: &Path,
    config: &SnapshotConfig,
    out: &mut W,
    diagnostics: &dyn Diagnostics,
) -> Result<SnapshotSummary, SnapError> {
    snapshot_into(root, config, out, diagnostics, None)
}
/// Shared body of the public entry points. `artifact` is the output file's
/// path relative to `root`, excluded from both walks.
fn snapshot_into<W: Write + ?Sized>(
    root: &Path,
    config: &SnapshotConfig,
    out: &mut W,
    diagnostics: &dyn Diagnostics,
    artifact: Option<&Path>,
) -> Result<SnapshotSummary, SnapError> {
    let rules = Arc::new(ExclusionRules::from_config(config));
    let mut summary = SnapshotSummary::default();

    let mut structure = String::new();
    for entry in Walker::new(root, &rules, artifact) {
        let entry = entry?;
        if entry.is_dir {
            summary.directories += 1;
        } else {
            summary.files_listed += 1;
        }
        push_entry(&mut structure, &entry);
    }
    diagnostics.record(&SnapshotEvent::WritingStructure);
    write_structure(out, &structure)?;

    for entry in Walker::new(root, &rules, artifact) {
        let entry = entry?;
        if entry.is_dir {
            continue;
        }
        if include_file(&entry, out, diagnostics)? {
            summary.files_written += 1;
        } else {
            summary.files_skipped += 1;
        }
    }
    Ok(summary)
}
/// Creates the configured output file and writes a snapshot of `root` into it.
///
/// # Errors
///
/// Returns [`SnapError::CreateOutput`] if the file cannot be created, and any
/// error of [`generate_snapshot`] otherwise. A failed run may leave a partial
/// file behind. The output file is left out of the snapshot when it lies
/// inside `root`.
pub fn write_snapshot_file(
    root: &Path,
    config: &SnapshotConfig,
    diagnostics: &dyn Diagnostics,
) -> Result<SnapshotSummary, SnapError> {
    diagnostics.record(&SnapshotEvent::CreatingOutput(&config.output));
    let file = File::create(&config.output).map_err(|source| SnapError::CreateOutput {
        path: config.output.clone(),
        source,
    })?;
    let artifact = artifact_in_tree(root, &config.output);
    let mut out = BufWriter::new(file);
    let summary = snapshot_into(root, config, &mut out, diagnostics, artifact.as_deref())?;
    out.flush().map_err(SnapError::Write)?;
    Ok(summary)
}
