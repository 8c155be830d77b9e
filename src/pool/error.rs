//! Errors raised at the image loader boundary.
//!
//! Nothing past [`load_pool`](super::load_pool) ever sees these: the loader
//! logs them and degrades to an empty pool or zero dimensions.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("cannot read photo directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot probe dimensions of {}: {message}", .path.display())]
    Probe { path: PathBuf, message: String },
}

impl PoolError {
    pub fn read_dir(path: &Path, source: std::io::Error) -> Self {
        PoolError::ReadDir {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn probe(path: &Path, err: imagesize::ImageError) -> Self {
        PoolError::Probe {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}
