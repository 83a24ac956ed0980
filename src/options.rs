use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output path used when none is given.
pub const DEFAULT_OUTPUT: &str = "snap.txt";

/// Settings for a single snapshot run. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Explicit exclusion patterns, in the order given.
    pub exclude: Vec<String>,
    /// Whether the built-in noise patterns apply.
    pub exclude_noise: bool,
    /// Where the artifact is written. Never included in its own snapshot.
    pub output: PathBuf,
    /// Allowed file name suffixes. Empty means every file is allowed.
    pub extensions: Vec<String>,
}
impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            exclude_noise: true,
            output: PathBuf::from(DEFAULT_OUTPUT),
            extensions: Vec::new(),
        }
    }
}
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    config: SnapshotConfig,
}
impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.config.exclude.push(pattern.into());
        self
    }
    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.config.exclude = patterns;
        self
    }
    pub fn exclude_noise(mut self, yes: bool) -> Self {
        self.config.exclude_noise = yes;
        self
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output = path.into();
        self
    }
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.config.extensions.push(ext.into());
        self
    }
    pub fn extensions(mut self, exts: Vec<String>) -> Self {
        self.config.extensions = exts;
        self
    }
    pub fn build(self) -> SnapshotConfig {
        self.config
    }
}
