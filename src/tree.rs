//! Internal module for rendering the directory structure section.

use crate::types::TraversalEntry;
const INDENT: &str = "  ";
/// Appends one structure line for `entry`: two spaces per depth level, then
/// the base name, with a trailing `/` for directories.
pub(crate) fn push_entry(buf: &mut String, entry: &TraversalEntry) {
    buf.push_str(&INDENT.repeat(entry.depth()));
    buf.push_str(&entry.name);
    if entry.is_dir {
        buf.push('/');
    }
    buf.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn entry(relative: &str, is_dir: bool) -> TraversalEntry {
        let name = Path::new(relative)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| relative.to_string());
        TraversalEntry {
            path: PathBuf::from(relative),
            relative: relative.to_string(),
            name,
            is_dir,
        }
    }

    #[test]
    fn renders_indent_from_relative_depth() {
        let mut buf = String::new();
        for (rel, dir) in [
            (".", true),
            ("a.go", false),
            ("sub", true),
            ("sub/c.go", false),
            ("sub/deeper", true),
            ("sub/deeper/d.go", false),
        ] {
            push_entry(&mut buf, &entry(rel, dir));
        }
        assert_eq!(buf, "./\na.go\nsub/\n  c.go\n  deeper/\n    d.go\n");
    }
}
