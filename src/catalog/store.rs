//! The CatalogStore - the ordered list of uploaded files.
//!
//! Owns the in-memory catalog and writes it through to the injected
//! repository after every mutation. The persisted slot always holds the
//! serialization of the current catalog; there is no batching.

use crate::catalog::{CatalogRepository, CatalogResult, FileRecord};
use tracing::warn;

pub struct CatalogStore {
    records: Vec<FileRecord>,
    repository: Box<dyn CatalogRepository>,
}

impl CatalogStore {
    /// Create a store hydrated from the repository's slot.
    ///
    /// A missing or unparsable slot yields an empty catalog; initialization
    /// never fails the caller.
    pub fn load(repository: Box<dyn CatalogRepository>) -> Self {
        let records = match repository.load() {
            Ok(records) => records,
            Err(err) => {
                warn!("catalog slot unreadable, starting empty: {err}");
                Vec::new()
            }
        };
        Self { records, repository }
    }

    /// The current catalog, in insertion order.
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record and persist the new catalog.
    ///
    /// The mutation applies in memory first; a persistence failure is
    /// returned for the caller to surface, not swallowed.
    pub fn add(&mut self, record: FileRecord) -> CatalogResult<()> {
        self.records.push(record);
        self.repository.save(&self.records)
    }

    /// Remove every record with the given name and persist.
    ///
    /// Returns the removed records so the caller can release their runtime
    /// display handles. An absent name removes nothing and is a no-op apart
    /// from the write-through.
    pub fn remove(&mut self, name: &str) -> CatalogResult<Vec<FileRecord>> {
        let mut removed = Vec::new();
        self.records.retain(|record| {
            if record.name == name {
                removed.push(record.clone());
                false
            } else {
                true
            }
        });
        self.repository.save(&self.records)?;
        Ok(removed)
    }

    /// Empty the catalog and delete the persisted slot.
    ///
    /// Returns the removed records for display-handle release.
    pub fn clear(&mut self) -> CatalogResult<Vec<FileRecord>> {
        let removed = std::mem::take(&mut self.records);
        self.repository.clear()?;
        Ok(removed)
    }

    /// Attach or replace the runtime display handle on the record at `index`.
    ///
    /// Handles are never durable, so this touches only the in-memory catalog.
    pub fn bind_display_handle(&mut self, index: usize, handle: String) {
        if let Some(record) = self.records.get_mut(index) {
            record.display_handle = Some(handle);
        }
    }
}
