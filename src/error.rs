// src/error.rs
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A dataset could not be loaded. Fatal at startup.
#[derive(Debug, Error)]
#[error("data unavailable: {}: {cause}", .path.display())]
pub struct DataUnavailable {
    pub path: PathBuf,
    pub cause: LoadCause,
}

impl DataUnavailable {
    pub fn new(path: &Path, cause: impl Into<LoadCause>) -> Self {
        Self { path: path.to_path_buf(), cause: cause.into() }
    }
}

#[derive(Debug, Error)]
pub enum LoadCause {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("missing column `{0}`")]
    MissingColumn(&'static str),
}

/// Frontend-level failures (GUI and CLI binaries).
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Data(#[from] DataUnavailable),

    #[error("{0}")]
    Args(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
