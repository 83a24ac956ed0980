//! Command-line surface.
//!
//! Flags may be spelled with one or two dashes. `-en` and `-ext` cannot be
//! expressed as clap short flags, so [`normalize_args`] rewrites single-dash
//! long spellings to their double-dash form before parsing.

use crate::options::{DEFAULT_OUTPUT, SnapshotBuilder, SnapshotConfig};
use clap::{ArgAction, Parser};
use clap::builder::BoolishValueParser;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Long spellings accepted after a single dash.
const LONG_NAMES: [&str; 6] = ["en", "ext", "exclude", "exclude-noise", "output", "extension"];

/// Flags whose value may follow as the next argument.
const VALUE_FLAGS: [&str; 6] = ["-e", "--exclude", "-o", "--output", "--ext", "--extension"];

/// Snapshot a directory tree into a single text file
#[derive(Debug, Parser)]
#[command(name = "dirsnap", version, about, long_about = None)]
pub struct Cli {
    /// Input directory [default: .]
    pub input: Option<PathBuf>,

    /// Positional arguments after the input directory; ignored
    #[arg(hide = true)]
    pub ignored: Vec<OsString>,

    /// Manually exclude specific files or folders (can be repeated)
    #[arg(short = 'e', long = "exclude", value_name = "PATTERN", allow_hyphen_values = true)]
    pub exclude: Vec<String>,

    /// Automatically exclude common development artifacts
    #[arg(
        long = "exclude-noise",
        visible_alias = "en",
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "true",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub exclude_noise: bool,

    /// Output file path
    #[arg(
        short = 'o',
        long = "output",
        default_value = DEFAULT_OUTPUT,
        allow_hyphen_values = true
    )]
    pub output: PathBuf,

    /// Include only files with the given extensions, e.g. .py or .go (can be repeated)
    #[arg(
        long = "extension",
        visible_alias = "ext",
        value_name = "EXT",
        allow_hyphen_values = true
    )]
    pub extensions: Vec<String>,
}

impl Cli {
    /// Parses normalized process arguments.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// The input directory, `.` when none was given.
    pub fn input_dir(&self) -> &Path {
        self.input.as_deref().unwrap_or(Path::new("."))
    }

    pub fn to_config(&self) -> SnapshotConfig {
        SnapshotBuilder::new()
            .exclude_patterns(self.exclude.clone())
            .exclude_noise(self.exclude_noise)
            .output(self.output.clone())
            .extensions(self.extensions.clone())
            .build()
    }
}

/// Rewrites `-en`, `-ext`, `-exclude`, `-exclude-noise`, `-output` and
/// `-extension` (with or without `=value`) to double-dash form. The first
/// element is the program name and is left alone, as is everything after
/// `--` and any argument consumed as the value of the previous flag.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut args = args.into_iter().map(Into::into);
    if let Some(program) = args.next() {
        out.push(program);
    }
    let mut expect_value = false;
    let mut passthrough = false;
    for arg in args {
        if passthrough || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }
        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };
        if text == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }
        let rewritten = rewrite_single_dash(text);
        let flag = rewritten.split('=').next().unwrap_or_default();
        expect_value = !rewritten.contains('=') && VALUE_FLAGS.contains(&flag);
        out.push(OsString::from(rewritten));
    }
    out
}

fn rewrite_single_dash(arg: &str) -> String {
    match arg.strip_prefix('-') {
        Some(rest) if !rest.starts_with('-') => {
            let name = rest.split('=').next().unwrap_or_default();
            if LONG_NAMES.contains(&name) {
                format!("-{arg}")
            } else {
                arg.to_string()
            }
        }
        _ => arg.to_string(),
    }
}
