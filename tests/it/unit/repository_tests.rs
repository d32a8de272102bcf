//! JsonSlotRepository tests: slot file semantics.

use crate::helpers::{pdf_record, record, temp_slot};
use courseshelf::catalog::{CatalogRepository, JsonSlotRepository};
use std::fs;

#[test]
fn missing_slot_loads_as_empty_catalog() {
    let (_dir, path) = temp_slot();
    let repository = JsonSlotRepository::new(&path);
    assert_eq!(repository.load().unwrap(), Vec::new());
}

#[test]
fn save_then_load_round_trips_records() {
    let (_dir, path) = temp_slot();
    let repository = JsonSlotRepository::new(&path);

    let mut saved = vec![record("a.pdf", b"alpha"), record("b.pdf", b"beta")];
    // Runtime handles must not survive the round trip.
    saved[0].display_handle = Some("http://127.0.0.1:9999/doc/1".into());
    repository.save(&saved).unwrap();

    let loaded = repository.load().unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].display_handle, None);
    assert_eq!(loaded[0].name, saved[0].name);
    assert_eq!(loaded[0].size, saved[0].size);
    assert_eq!(loaded[0].mime_type, saved[0].mime_type);
    assert_eq!(loaded[0].encoded_payload, saved[0].encoded_payload);
    assert_eq!(loaded[1], saved[1]);
}

#[test]
fn save_creates_missing_parent_directories() {
    let (dir, _path) = temp_slot();
    let nested = dir.path().join("deeply/nested/uploaded_files.json");
    let repository = JsonSlotRepository::new(&nested);

    repository.save(&[pdf_record("a.pdf")]).unwrap();
    assert!(nested.exists());
    assert_eq!(repository.load().unwrap().len(), 1);
}

#[test]
fn malformed_slot_is_a_load_error() {
    let (_dir, path) = temp_slot();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{ definitely not a catalog").unwrap();

    let repository = JsonSlotRepository::new(&path);
    assert!(repository.load().is_err());
}

#[test]
fn clear_removes_the_slot_file() {
    let (_dir, path) = temp_slot();
    let repository = JsonSlotRepository::new(&path);
    repository.save(&[pdf_record("a.pdf")]).unwrap();
    assert!(path.exists());

    repository.clear().unwrap();
    assert!(!path.exists());
}

#[test]
fn clear_of_missing_slot_succeeds() {
    let (_dir, path) = temp_slot();
    let repository = JsonSlotRepository::new(&path);
    repository.clear().unwrap();
}
