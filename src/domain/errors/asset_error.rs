//! Asset loading error types.

use std::path::PathBuf;

use thiserror::Error;

/// Asset error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum AssetError {
    #[error("failed to read asset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("asset {path} is empty")]
    Empty { path: PathBuf },
}

impl AssetError {
    /// Creates read error.
    #[must_use]
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates empty asset error.
    #[must_use]
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self::Empty { path: path.into() }
    }
}
