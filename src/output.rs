//! Writers for the two sections of the snapshot artifact.
//!
//! The artifact is plain text:
//!
//! ```text
//! Directory Structure:
//! <structure lines>
//!
//! === File Contents ===
//!
//! File: <relative/path>
//! <raw bytes>
//!
//! ```
//!
//! Every write failure is mapped to [`SnapError::Write`] and is fatal.

use crate::error::SnapError;
use std::io::Write;
pub const STRUCTURE_HEADER: &str = "Directory Structure:\n";
pub const CONTENTS_HEADER: &str = "\n=== File Contents ===\n\n";
/// Writes the structure header, the rendered structure and the contents header.
pub fn write_structure<W: Write + ?Sized>(out: &mut W, structure: &str) -> Result<(), SnapError> {
    out.write_all(STRUCTURE_HEADER.as_bytes())
        .map_err(SnapError::Write)?;
    out.write_all(structure.as_bytes())
        .map_err(SnapError::Write)?;
    out.write_all(CONTENTS_HEADER.as_bytes())
        .map_err(SnapError::Write)
}
/// Writes one file section: header line, raw content, blank separator.
pub fn write_file_section<W: Write + ?Sized>(
    out: &mut W,
    relative: &str,
    content: &[u8],
) -> Result<(), SnapError> {
    writeln!(out, "File: {relative}").map_err(SnapError::Write)?;
    out.write_all(content).map_err(SnapError::Write)?;
    out.write_all(b"\n\n").map_err(SnapError::Write)
}
