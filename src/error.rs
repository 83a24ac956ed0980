use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum SnapError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
    #[error("Cannot create output file {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Write error: {0}")]
    Write(#[source] std::io::Error),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}
impl SnapError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SnapError::Io {
            path: path.into(),
            source,
        }
    }
}
