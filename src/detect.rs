//! Binary detection over a fixed leading sample.

use crate::error::SnapError;
use std::fs::File;
use std::io::Read;
use std::path::Path;
/// Number of leading bytes inspected per file.
pub const SAMPLE_SIZE: usize = 1024;
/// Classifies a leading sample: a null byte, or bytes that are not valid
/// UTF-8, mean binary. The null check runs first.
///
/// A multi-byte character cut at the sample boundary fails validation and is
/// reported as binary.
pub fn is_binary_sample(sample: &[u8]) -> bool {
    sample.contains(&0) || std::str::from_utf8(sample).is_err()
}
/// Reads up to [`SAMPLE_SIZE`] bytes from `path` and classifies them.
///
/// # Errors
///
/// Returns [`SnapError::Io`] if the file cannot be opened or read.
pub fn is_binary_file(path: &Path) -> Result<bool, SnapError> {
    let file = File::open(path).map_err(|e| SnapError::io(path, e))?;
    let mut sample = Vec::with_capacity(SAMPLE_SIZE);
    file.take(SAMPLE_SIZE as u64)
        .read_to_end(&mut sample)
        .map_err(|e| SnapError::io(path, e))?;
    Ok(is_binary_sample(&sample))
}
