//! Error types for tree rendering

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TreeError>;

#[derive(Debug, Error)]
pub enum TreeError {
    /// A directory could not be listed. Aborts the whole render.
    #[error("cannot read directory '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error writing output: {0}")]
    Write(#[from] io::Error),
    #[error("error serializing JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("usage: {0}")]
    Usage(String),
}

impl TreeError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TreeError::Read {
            path: path.into(),
            source,
        }
    }

    /// Path of the directory that failed to list, if this is a read error.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            TreeError::Read { path, .. } => Some(path),
            _ => None,
        }
    }
}
