use crate::error::SnapError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
/// One path produced by the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalEntry {
    /// Path on disk, used to open the file.
    pub path: PathBuf,
    /// Path relative to the input root. The root itself is `.`.
    pub relative: String,
    /// Base name of the entry.
    pub name: String,
    pub is_dir: bool,
}
impl TraversalEntry {
    pub fn new(root: &Path, path: &Path, is_dir: bool) -> Result<Self, SnapError> {
        let rel = path
            .strip_prefix(root)
            .map_err(|_| SnapError::InvalidPath(path.display().to_string()))?;
        let relative = if rel.as_os_str().is_empty() {
            ".".to_string()
        } else {
            rel.to_string_lossy().into_owned()
        };
        let name = path
            .file_name()
            .unwrap_or(path.as_os_str())
            .to_string_lossy()
            .into_owned();
        Ok(Self {
            path: path.to_path_buf(),
            relative,
            name,
            is_dir,
        })
    }
    /// Number of segments in the relative path, minus one.
    pub fn depth(&self) -> usize {
        Path::new(&self.relative)
            .components()
            .count()
            .saturating_sub(1)
    }
}
/// Counters for a finished snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotSummary {
    /// Directories listed in the structure section, the root included.
    pub directories: usize,
    /// Files listed in the structure section.
    pub files_listed: usize,
    /// Files whose contents were written.
    pub files_written: usize,
    /// Listed files left out of the contents section (binary or unreadable).
    pub files_skipped: usize,
}
