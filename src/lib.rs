//! # dirsnap
//!
//! `dirsnap` walks a directory tree and writes a single text artifact: an
//! indented listing of the tree followed by the contents of every file that is
//! neither excluded nor binary. The result is a readable snapshot of a
//! codebase, suitable for pasting into a review or an LLM prompt.
//!
//! Exclusion combines explicit patterns, a built-in list of noise patterns
//! ([`NOISE_PATTERNS`]) and an optional extension allow-list. Binary files are
//! detected from their first [`SAMPLE_SIZE`] bytes.
//!
//! # Example
//!
//! ```no_run
//! use dirsnap::{SnapshotBuilder, Silent, generate_snapshot};
//! use std::path::Path;
//!
//! let config = SnapshotBuilder::new()
//!     .exclude("target")
//!     .extension(".rs")
//!     .build();
//!
//! let mut out = Vec::new();
//! let summary = generate_snapshot(Path::new("."), &config, &mut out, &Silent)
//!     .expect("Failed to snapshot directory");
//!
//! println!("{} files written", summary.files_written);
//! print!("{}", String::from_utf8_lossy(&out));
//! ```

pub mod cli;
mod detect;
mod diagnostics;
mod engine;
mod error;
mod filter;
mod options;
pub mod output;
mod tree;
mod types;

pub use detect::{SAMPLE_SIZE, is_binary_file, is_binary_sample};
pub use diagnostics::{Diagnostics, Silent, SnapshotEvent, TracingDiagnostics};
pub use engine::{generate_snapshot, write_snapshot_file};
pub use error::SnapError;
pub use filter::{ExclusionRules, NOISE_PATTERNS};
pub use options::{DEFAULT_OUTPUT, SnapshotBuilder, SnapshotConfig};
pub use types::{SnapshotSummary, TraversalEntry};
