// src/config/options.rs
use std::path::PathBuf;

use super::consts::DEFAULT_PLAYERS_FILE;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub data: DataOptions,
}

/// Where the datasets live. The football file is optional; without it
/// the teammate table is not offered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataOptions {
    pub players_path: PathBuf,
    pub football_path: Option<PathBuf>,
}

impl Default for DataOptions {
    fn default() -> Self {
        Self {
            players_path: PathBuf::from(DEFAULT_PLAYERS_FILE),
            football_path: None,
        }
    }
}

impl DataOptions {
    pub fn has_football(&self) -> bool {
        self.football_path.is_some()
    }
}
