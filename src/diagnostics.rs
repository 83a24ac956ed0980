//! Diagnostic events emitted while a snapshot is generated.
//!
//! The generator never logs directly; it reports [`SnapshotEvent`]s to the
//! [`Diagnostics`] sink it is handed. The binary passes
//! [`TracingDiagnostics`], tests usually pass [`Silent`].

use crate::error::SnapError;
use std::fmt;
use std::path::Path;
/// A significant step of a snapshot run.
#[derive(Debug)]
pub enum SnapshotEvent<'a> {
    CreatingOutput(&'a Path),
    WritingStructure,
    Checking(&'a str),
    CheckFailed { path: &'a str, error: &'a SnapError },
    SkippedBinary(&'a str),
    Reading(&'a str),
    ReadFailed { path: &'a str, error: &'a SnapError },
    Writing(&'a str),
}
impl SnapshotEvent<'_> {
    /// Skips and per-file failures.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            SnapshotEvent::CheckFailed { .. }
                | SnapshotEvent::SkippedBinary(_)
                | SnapshotEvent::ReadFailed { .. }
        )
    }
}
impl fmt::Display for SnapshotEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotEvent::CreatingOutput(path) => {
                write!(f, "Creating output file: {}", path.display())
            }
            SnapshotEvent::WritingStructure => {
                write!(f, "Writing directory structure to output file")
            }
            SnapshotEvent::Checking(path) => write!(f, "Checking file: {path}"),
            SnapshotEvent::CheckFailed { path, error } => {
                write!(f, "Error checking file {path}: {error}")
            }
            SnapshotEvent::SkippedBinary(path) => {
                write!(f, "Skipping binary or non-UTF-8 file: {path}")
            }
            SnapshotEvent::Reading(path) => write!(f, "Reading file: {path}"),
            SnapshotEvent::ReadFailed { path, error } => {
                write!(f, "Error reading file {path}: {error}")
            }
            SnapshotEvent::Writing(path) => write!(f, "Writing file content: {path}"),
        }
    }
}
/// Receives diagnostic events.
pub trait Diagnostics {
    fn record(&self, event: &SnapshotEvent<'_>);
}
/// Forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;
impl Diagnostics for TracingDiagnostics {
    fn record(&self, event: &SnapshotEvent<'_>) {
        if event.is_warning() {
            tracing::warn!("{}", event);
        } else {
            tracing::info!("{}", event);
        }
    }
}
/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;
impl Diagnostics for Silent {
    fn record(&self, _event: &SnapshotEvent<'_>) {}
}
