//! Run configuration.
//!
//! The defaults are the tracker's static settings; the CLI may override any of them.

use crate::error::{CitetrackError, Result};
use std::path::PathBuf;

/// Author tracked when none is given (INSPIRE BAI)
pub const DEFAULT_AUTHOR: &str = "P.Motloch.2";

/// Number of papers requested from INSPIRE-HEP
pub const DEFAULT_MAX_PAPERS: usize = 1000;

/// Long titles are shortened to this many characters
pub const DEFAULT_TITLE_LENGTH: usize = 50;

/// Whether to ask before writing the snapshot to disk
pub const DEFAULT_NEED_WRITE_CONFIRM: bool = true;

/// Snapshot file, relative to the working directory
pub const DEFAULT_SNAPSHOT_FILE: &str = "old_biblio.json";

/// Settings for one tracking run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Author BAI, e.g. `P.Motloch.2`
    pub author: String,
    pub max_papers: usize,
    pub title_length: usize,
    pub need_write_confirm: bool,
    pub snapshot_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            author: DEFAULT_AUTHOR.to_string(),
            max_papers: DEFAULT_MAX_PAPERS,
            title_length: DEFAULT_TITLE_LENGTH,
            need_write_confirm: DEFAULT_NEED_WRITE_CONFIRM,
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_FILE),
        }
    }
}

impl Config {
    /// Reject settings that cannot produce a meaningful run
    pub fn validate(&self) -> Result<()> {
        if self.author.trim().is_empty() {
            return Err(CitetrackError::Config("author must not be empty".to_string()));
        }
        if self.max_papers == 0 {
            return Err(CitetrackError::Config(
                "max papers must be at least 1".to_string(),
            ));
        }
        if self.title_length == 0 {
            return Err(CitetrackError::Config(
                "title length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
