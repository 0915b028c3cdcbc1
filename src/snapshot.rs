//! Snapshot persistence.
//!
//! The snapshot is the whole bibliography from a previous run, stored as one
//! JSON array and replaced wholesale on every save.

use crate::bibliography::Bibliography;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads and writes the snapshot file
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the snapshot file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved bibliography.
    ///
    /// Returns `Ok(None)` if no snapshot has been saved yet. A snapshot that
    /// exists but cannot be read or parsed is an error.
    pub fn load(&self) -> Result<Option<Bibliography>> {
        if !self.path.exists() {
            debug!("Snapshot file not found: {:?}", self.path);
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let biblio: Bibliography = serde_json::from_str(&content)?;
        info!("Loaded snapshot of {} papers from {:?}", biblio.len(), self.path);
        Ok(Some(biblio))
    }

    /// Replace the snapshot with `biblio`
    pub fn save(&self, biblio: &Bibliography) -> Result<()> {
        let content = serde_json::to_string_pretty(biblio)?;
        std::fs::write(&self.path, content)?;
        info!("Saved snapshot of {} papers to {:?}", biblio.len(), self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bibliography::PaperRecord;
    use crate::error::CitetrackError;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_missing() -> Result<()> {
        let dir = TempDir::new()?;
        let store = SnapshotStore::new(dir.path().join("old_biblio.json"));
        assert!(store.load()?.is_none());
        Ok(())
    }

    #[test]
    fn test_save_and_load() -> Result<()> {
        let dir = TempDir::new()?;
        let store = SnapshotStore::new(dir.path().join("old_biblio.json"));

        let biblio = Bibliography::new(vec![
            PaperRecord::new(1, "A", 10, 8),
            PaperRecord::new(2, "B", 1, 1),
        ]);
        store.save(&biblio)?;

        assert_eq!(store.load()?, Some(biblio));
        Ok(())
    }

    #[test]
    fn test_save_replaces_previous() -> Result<()> {
        let dir = TempDir::new()?;
        let store = SnapshotStore::new(dir.path().join("old_biblio.json"));

        store.save(&Bibliography::new(vec![PaperRecord::new(1, "A", 10, 8)]))?;
        let replacement = Bibliography::new(vec![PaperRecord::new(2, "B", 3, 3)]);
        store.save(&replacement)?;

        assert_eq!(store.load()?, Some(replacement));
        Ok(())
    }

    #[test]
    fn test_load_corrupt_is_error() -> Result<()> {
        let mut temp = NamedTempFile::new()?;
        temp.write_all(b"{not json")?;
        let store = SnapshotStore::new(temp.path());
        assert!(matches!(store.load(), Err(CitetrackError::Json(_))));
        Ok(())
    }
}
