//! The persisted-slot interface and its JSON file backend.
//!
//! The catalog lives in a single named slot that is fully overwritten on
//! every mutation. The repository seam keeps the store testable and makes
//! persistence failures explicit instead of swallowed.

use crate::catalog::{CatalogResult, FileRecord};
use crate::constants::{APP_DIR, CATALOG_SLOT_FILE};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Storage backend for the persisted catalog slot.
pub trait CatalogRepository {
    /// Read the slot. An absent slot is an empty catalog; unreadable or
    /// unparsable data is an error (the store decides how to degrade).
    fn load(&self) -> CatalogResult<Vec<FileRecord>>;

    /// Overwrite the slot with the full catalog.
    fn save(&self, records: &[FileRecord]) -> CatalogResult<()>;

    /// Delete the slot. Deleting an absent slot succeeds.
    fn clear(&self) -> CatalogResult<()>;
}

/// The default slot location under the platform data directory.
pub fn default_slot_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
        .join(CATALOG_SLOT_FILE)
}

/// JSON file implementation of the persisted slot.
pub struct JsonSlotRepository {
    path: PathBuf,
}

impl JsonSlotRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CatalogRepository for JsonSlotRepository {
    fn load(&self) -> CatalogResult<Vec<FileRecord>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&text)?)
    }

    fn save(&self, records: &[FileRecord]) -> CatalogResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> CatalogResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
