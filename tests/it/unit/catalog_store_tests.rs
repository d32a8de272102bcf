//! CatalogStore tests: write-through mutations and degraded loads.

use crate::helpers::{assert_catalog_names, pdf_record, record, temp_slot, temp_store};
use courseshelf::catalog::{
    CatalogError, CatalogRepository, CatalogResult, CatalogStore, FileRecord, JsonSlotRepository,
};
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Repository whose writes always fail, for exercising the error path.
struct FailingRepository {
    failures: Arc<AtomicUsize>,
}

impl CatalogRepository for FailingRepository {
    fn load(&self) -> CatalogResult<Vec<FileRecord>> {
        Ok(Vec::new())
    }

    fn save(&self, _records: &[FileRecord]) -> CatalogResult<()> {
        self.failures.fetch_add(1, Ordering::SeqCst);
        Err(CatalogError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "slot is read-only",
        )))
    }

    fn clear(&self) -> CatalogResult<()> {
        self.failures.fetch_add(1, Ordering::SeqCst);
        Err(CatalogError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "slot is read-only",
        )))
    }
}

#[test]
fn add_appends_and_persists() {
    let (_dir, path, mut store) = temp_store();
    let payload = b"%PDF-1.7 first";
    store.add(record("a.pdf", payload)).unwrap();

    assert_catalog_names(&store, &["a.pdf"]);
    let added = &store.records()[0];
    assert_eq!(added.name, "a.pdf");
    assert_eq!(added.size, payload.len() as u64);
    assert_eq!(added.mime_type, "application/pdf");
    assert_eq!(added.decode_payload().unwrap(), payload);

    // Write-through: a fresh store over the same slot sees the record.
    let reloaded = CatalogStore::load(Box::new(JsonSlotRepository::new(&path)));
    assert_catalog_names(&reloaded, &["a.pdf"]);
}

#[test]
fn duplicate_names_are_allowed() {
    let (_dir, _path, mut store) = temp_store();
    store.add(pdf_record("same.pdf")).unwrap();
    store.add(pdf_record("same.pdf")).unwrap();
    assert_catalog_names(&store, &["same.pdf", "same.pdf"]);
}

#[test]
fn add_surfaces_persistence_failure_but_keeps_memory() {
    let failures = Arc::new(AtomicUsize::new(0));
    let mut store = CatalogStore::load(Box::new(FailingRepository {
        failures: failures.clone(),
    }));

    let result = store.add(pdf_record("a.pdf"));
    assert!(result.is_err());
    assert_eq!(failures.load(Ordering::SeqCst), 1);
    // The in-memory catalog keeps the record even when the write fails.
    assert_catalog_names(&store, &["a.pdf"]);
}

#[test]
fn remove_drops_every_record_with_the_name() {
    let (_dir, _path, mut store) = temp_store();
    store.add(pdf_record("a.pdf")).unwrap();
    store.add(pdf_record("b.pdf")).unwrap();
    store.add(pdf_record("a.pdf")).unwrap();

    let removed = store.remove("a.pdf").unwrap();
    assert_eq!(removed.len(), 2);
    assert_catalog_names(&store, &["b.pdf"]);
}

#[test]
fn remove_of_absent_name_is_a_noop() {
    let (_dir, _path, mut store) = temp_store();
    store.add(pdf_record("a.pdf")).unwrap();

    let removed = store.remove("missing.pdf").unwrap();
    assert!(removed.is_empty());
    assert_catalog_names(&store, &["a.pdf"]);
}

#[test]
fn clear_empties_catalog_and_deletes_slot() {
    let (_dir, path, mut store) = temp_store();
    store.add(pdf_record("a.pdf")).unwrap();
    store.add(pdf_record("b.pdf")).unwrap();
    assert!(path.exists());

    let removed = store.clear().unwrap();
    assert_eq!(removed.len(), 2);
    assert!(store.is_empty());
    assert!(!path.exists());
}

#[test]
fn clear_of_empty_catalog_succeeds() {
    let (_dir, path, mut store) = temp_store();
    let removed = store.clear().unwrap();
    assert!(removed.is_empty());
    assert!(!path.exists());
}

#[test]
fn load_with_malformed_slot_starts_empty() {
    let (_dir, path) = temp_slot();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "not json at all").unwrap();

    let store = CatalogStore::load(Box::new(JsonSlotRepository::new(&path)));
    assert!(store.is_empty());
}

#[test]
fn display_handles_bind_in_memory_only() {
    let (_dir, path, mut store) = temp_store();
    store.add(pdf_record("a.pdf")).unwrap();
    store.bind_display_handle(0, "http://127.0.0.1:9999/doc/1".into());
    assert_eq!(
        store.records()[0].display_handle.as_deref(),
        Some("http://127.0.0.1:9999/doc/1")
    );

    // Handles are never written to the slot.
    let reloaded = CatalogStore::load(Box::new(JsonSlotRepository::new(&path)));
    assert_eq!(reloaded.records()[0].display_handle, None);
}

#[test]
fn bind_display_handle_out_of_range_is_ignored() {
    let (_dir, _path, mut store) = temp_store();
    store.bind_display_handle(5, "http://example.invalid".into());
    assert!(store.is_empty());
}
