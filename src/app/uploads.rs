//! Upload ingestion and catalog mutations.
//!
//! Files arrive from an OS drop or the native picker. Validation is
//! synchronous; the byte read that produces the durable payload runs on the
//! background executor, so concurrent ingests race independently and may
//! complete in any order. Store notifications (`cx.notify`) fire
//! synchronously after each mutation's persistence step.

use super::Courseshelf;
use super::cards::remove_thumbnail_file;
use crate::catalog::FileRecord;
use crate::validate::{mime_type_for_path, validate};
use gpui::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

impl Courseshelf {
    /// Handle an OS drop on the upload zone. Only the first path is taken.
    pub fn handle_dropped_paths(&mut self, paths: &[PathBuf], cx: &mut Context<Self>) {
        self.upload.drag_active = false;
        if let Some(path) = paths.first() {
            self.ingest_path(path.clone(), cx);
        } else {
            cx.notify();
        }
    }

    /// Open the native file picker and ingest the selection.
    pub fn open_file_picker(&mut self, _window: &mut Window, cx: &mut Context<Self>) {
        let paths = cx.prompt_for_paths(PathPromptOptions {
            files: true,
            directories: false,
            multiple: false,
            prompt: None,
        });
        cx.spawn(async move |this, cx| {
            if let Ok(Ok(Some(mut selected))) = paths.await {
                if let Some(path) = selected.pop() {
                    this.update(cx, |this, cx| this.ingest_path(path, cx)).ok();
                }
            }
        })
        .detach();
    }

    /// Validate a candidate and, on acceptance, start the asynchronous read
    /// that turns it into a catalog record.
    pub fn ingest_path(&mut self, path: PathBuf, cx: &mut Context<Self>) {
        let name = file_name_of(&path);
        let mime_type = mime_type_for_path(&path).to_string();
        let size = match std::fs::metadata(&path) {
            Ok(metadata) => metadata.len(),
            Err(err) => {
                self.upload.error = Some(format!("Could not read {name}: {err}"));
                cx.notify();
                return;
            }
        };

        if let Err(rejection) = validate(size, &mime_type) {
            self.upload.error = Some(rejection.to_string());
            cx.notify();
            return;
        }

        self.upload.error = None;
        self.upload.selected_name = Some(name.clone());
        cx.notify();

        let read = cx.background_spawn({
            let path = path.clone();
            async move { std::fs::read(&path) }
        });
        cx.spawn(async move |this, cx| {
            match read.await {
                Ok(bytes) => {
                    this.update(cx, |this, cx| this.finish_ingest(name, mime_type, bytes, cx))
                        .ok();
                }
                Err(err) => {
                    this.update(cx, |this, cx| {
                        this.upload.error = Some(format!("Could not read {name}: {err}"));
                        cx.notify();
                    })
                    .ok();
                }
            }
        })
        .detach();
    }

    /// Build the record from the read bytes, mint its display handle, add it
    /// to the catalog, and kick off the first-page render.
    fn finish_ingest(
        &mut self,
        name: String,
        mime_type: String,
        bytes: Vec<u8>,
        cx: &mut Context<Self>,
    ) {
        let bytes = Arc::new(bytes);
        let mut record = FileRecord::from_bytes(&name, &mime_type, &bytes);

        if let Some(preview) = &self.system.preview {
            let handle = preview.register(bytes.clone(), &mime_type);
            record.display_handle = Some(handle.url);
            self.system
                .preview_ids
                .entry(name.clone())
                .or_default()
                .push(handle.id);
        }

        // Minted alongside the append so card ids stay aligned with the
        // catalog's record order.
        let card_id = self.cards.push_id();
        match self.store.add(record) {
            Ok(()) => {
                self.system.status = None;
                info!("added {name} ({} bytes) to the catalog", bytes.len());
            }
            Err(err) => {
                error!("persisting the catalog failed: {err}");
                self.system.status = Some(format!("Saving the catalog failed: {err}"));
            }
        }

        self.request_thumbnail(card_id, name, bytes, cx);
        cx.notify();
    }

    /// Remove every record with `name`, releasing its display handles and
    /// forgetting its thumbnail so in-flight renders become stale.
    pub fn remove_record(&mut self, name: &str, cx: &mut Context<Self>) {
        let removed_card_ids: Vec<u64> = self
            .store
            .records()
            .iter()
            .zip(self.cards.ids())
            .filter(|(record, _)| record.name == name)
            .map(|(_, id)| *id)
            .collect();

        match self.store.remove(name) {
            Ok(_removed) => self.system.status = None,
            Err(err) => {
                error!("persisting the catalog failed: {err}");
                self.system.status = Some(format!("Saving the catalog failed: {err}"));
            }
        }

        if let Some(preview) = &self.system.preview {
            for id in self.system.preview_ids.remove(name).unwrap_or_default() {
                preview.release(id);
            }
        }
        for card_id in removed_card_ids {
            if let Some(path) = self.cards.forget(card_id) {
                remove_thumbnail_file(&path);
            }
        }
        if self.upload.selected_name.as_deref() == Some(name) {
            self.upload.selected_name = None;
        }
        cx.notify();
    }

    /// Empty the catalog, delete the persisted slot, and release every
    /// display handle.
    pub fn clear_catalog(&mut self, cx: &mut Context<Self>) {
        match self.store.clear() {
            Ok(_removed) => self.system.status = None,
            Err(err) => {
                error!("deleting the catalog slot failed: {err}");
                self.system.status = Some(format!("Clearing the catalog failed: {err}"));
            }
        }

        if let Some(preview) = &self.system.preview {
            preview.release_all();
        }
        self.system.preview_ids.clear();
        for path in self.cards.forget_all() {
            remove_thumbnail_file(&path);
        }
        self.upload.selected_name = None;
        cx.notify();
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("untitled.pdf")
        .to_string()
}
