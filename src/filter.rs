//! Exclusion rules applied to every walked entry.
//!
//! Matching is deliberately plain: a pattern excludes an entry when it occurs
//! anywhere in the relative path or equals the base name. There is no glob or
//! path-segment awareness, so `log` also excludes `catalog.txt`.

use crate::options::SnapshotConfig;
use crate::types::TraversalEntry;
/// Common development artifacts skipped when noise exclusion is on.
pub const NOISE_PATTERNS: [&str; 12] = [
    ".git",
    ".venv",
    "__pycache__",
    "node_modules",
    ".idea",
    ".DS_Store",
    "lib",
    "test",
    "etc",
    "log",
    "tools",
    ".md",
];
/// Immutable exclusion rules derived from a [`SnapshotConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRules {
    exclude: Vec<String>,
    exclude_noise: bool,
    noise: Vec<String>,
    // lowercased once, compared against lowercased names
    extensions: Vec<String>,
}
impl ExclusionRules {
    pub fn new(
        exclude: Vec<String>,
        exclude_noise: bool,
        noise: Vec<String>,
        extensions: &[String],
    ) -> Self {
        Self {
            exclude,
            exclude_noise,
            noise,
            extensions: extensions.iter().map(|e| e.to_lowercase()).collect(),
        }
    }
    pub fn from_config(config: &SnapshotConfig) -> Self {
        Self::new(
            config.exclude.clone(),
            config.exclude_noise,
            NOISE_PATTERNS.iter().map(|p| p.to_string()).collect(),
            &config.extensions,
        )
    }
    /// Returns true when the entry must be left out of the snapshot.
    pub fn excludes(&self, entry: &TraversalEntry) -> bool {
        self.excludes_path(&entry.relative, &entry.name, entry.is_dir)
    }
    pub fn excludes_path(&self, relative: &str, name: &str, is_dir: bool) -> bool {
        if matches_any(&self.exclude, relative, name) {
            return true;
        }
        if self.exclude_noise && matches_any(&self.noise, relative, name) {
            return true;
        }
        if !self.extensions.is_empty() && !is_dir {
            let name = name.to_lowercase();
            return !self.extensions.iter().any(|ext| name.ends_with(ext.as_str()));
        }
        false
    }
}
fn matches_any(patterns: &[String], relative: &str, name: &str) -> bool {
    patterns
        .iter()
        .any(|p| relative.contains(p.as_str()) || name == p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SnapshotBuilder;

    fn rules(config: SnapshotConfig) -> ExclusionRules {
        ExclusionRules::from_config(&config)
    }

    #[test]
    fn explicit_pattern_matches_substring_of_path() {
        let r = rules(SnapshotBuilder::new().exclude("vendor").exclude_noise(false).build());
        assert!(r.excludes_path("third_party/vendor/x.c", "x.c", false));
        assert!(r.excludes_path("vendor", "vendor", true));
        assert!(!r.excludes_path("src/main.rs", "main.rs", false));
    }

    #[test]
    fn explicit_pattern_matches_exact_name() {
        let r = rules(SnapshotBuilder::new().exclude("Makefile").exclude_noise(false).build());
        assert!(r.excludes_path("build/Makefile", "Makefile", false));
    }

    #[test]
    fn noise_patterns_only_apply_when_enabled() {
        let on = rules(SnapshotBuilder::new().build());
        let off = rules(SnapshotBuilder::new().exclude_noise(false).build());
        for (rel, name, dir) in [
            (".git", ".git", true),
            ("web/node_modules", "node_modules", true),
            ("pkg/__pycache__", "__pycache__", true),
            ("README.md", "README.md", false),
            (".DS_Store", ".DS_Store", false),
        ] {
            assert!(on.excludes_path(rel, name, dir), "{rel} should be noise");
            assert!(!off.excludes_path(rel, name, dir), "{rel} kept without noise");
        }
    }

    #[test]
    fn substring_matching_catches_unrelated_names() {
        // `log` is a noise pattern; plain substring matching hits catalog.txt too.
        let r = rules(SnapshotBuilder::new().build());
        assert!(r.excludes_path("catalog.txt", "catalog.txt", false));
        assert!(r.excludes_path("src/library.rs", "library.rs", false));
        assert!(r.excludes_path("contest/a.go", "a.go", false));
    }

    #[test]
    fn extension_filter_is_case_insensitive_suffix() {
        let r = rules(
            SnapshotBuilder::new()
                .exclude_noise(false)
                .extension(".GO")
                .extension(".rs")
                .build(),
        );
        assert!(!r.excludes_path("a.go", "a.go", false));
        assert!(!r.excludes_path("B.Go", "B.Go", false));
        assert!(!r.excludes_path("x/main.RS", "main.RS", false));
        assert!(r.excludes_path("b.py", "b.py", false));
    }

    #[test]
    fn directories_are_never_extension_filtered() {
        let r = rules(SnapshotBuilder::new().exclude_noise(false).extension(".go").build());
        assert!(!r.excludes_path("cmd", "cmd", true));
        assert!(!r.excludes_path(".", ".", true));
    }

    #[test]
    fn empty_extension_list_allows_everything() {
        let r = rules(SnapshotBuilder::new().exclude_noise(false).build());
        assert!(!r.excludes_path("data.bin", "data.bin", false));
    }

    #[test]
    fn empty_pattern_excludes_everything() {
        let r = rules(SnapshotBuilder::new().exclude("").exclude_noise(false).build());
        assert!(r.excludes_path(".", ".", true));
        assert!(r.excludes_path("a.go", "a.go", false));
    }

    #[test]
    fn evaluation_is_order_independent() {
        let a = rules(SnapshotBuilder::new().exclude("x").exclude("y").extension(".a").extension(".b").build());
        let b = rules(SnapshotBuilder::new().exclude("y").exclude("x").extension(".b").extension(".a").build());
        for (rel, name, dir) in [
            ("x.a", "x.a", false),
            ("q.b", "q.b", false),
            ("q.c", "q.c", false),
            ("dir", "dir", true),
            ("ydir", "ydir", true),
        ] {
            assert_eq!(a.excludes_path(rel, name, dir), b.excludes_path(rel, name, dir));
            assert_eq!(a.excludes_path(rel, name, dir), a.excludes_path(rel, name, dir));
        }
    }
}
