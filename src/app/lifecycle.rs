//! Application lifecycle - initialization and catalog re-hydration.

use super::{CardsState, Courseshelf, SystemState, UploadState};
use crate::catalog::{CatalogStore, JsonSlotRepository, default_slot_path};
use crate::constants::{APP_DIR, THUMBNAIL_DIR};
use crate::preview::PreviewServer;
use gpui::*;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, warn};

impl Courseshelf {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let repository = JsonSlotRepository::new(default_slot_path());
        let store = CatalogStore::load(Box::new(repository));

        let preview = match PreviewServer::start() {
            Ok(server) => Some(server),
            Err(err) => {
                error!("preview server unavailable, display handles disabled: {err}");
                None
            }
        };

        let thumbnail_dir = dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_DIR)
            .join(THUMBNAIL_DIR);
        if let Err(err) = std::fs::create_dir_all(&thumbnail_dir) {
            warn!("could not create thumbnail cache dir: {err}");
        }

        let mut this = Self {
            store,
            upload: UploadState::default(),
            cards: CardsState::default(),
            system: SystemState {
                preview,
                preview_ids: HashMap::new(),
                thumbnail_dir,
                status: None,
            },
        };
        this.rehydrate(cx);
        this
    }

    /// Re-hydrate runtime state for records loaded from the persisted slot:
    /// decode each payload, mint a fresh display handle, and kick off the
    /// first-page render. Handles are ephemeral, so none of this survives in
    /// the slot itself.
    fn rehydrate(&mut self, cx: &mut Context<Self>) {
        // One card id per record, assigned up front so the id list stays
        // aligned with the catalog even when a payload turns out to be
        // undecodable.
        let card_ids: Vec<u64> = (0..self.store.len())
            .map(|_| self.cards.push_id())
            .collect();

        let decoded: Vec<(usize, String, String, Vec<u8>)> = self
            .store
            .records()
            .iter()
            .enumerate()
            .filter_map(|(index, record)| match record.decode_payload() {
                Ok(bytes) => Some((
                    index,
                    record.name.clone(),
                    record.mime_type.clone(),
                    bytes,
                )),
                Err(err) => {
                    warn!("payload for {:?} is undecodable, no preview: {err}", record.name);
                    None
                }
            })
            .collect();

        for (index, name, mime_type, bytes) in decoded {
            let bytes = Arc::new(bytes);
            if let Some(preview) = &self.system.preview {
                let handle = preview.register(bytes.clone(), &mime_type);
                self.store.bind_display_handle(index, handle.url);
                self.system
                    .preview_ids
                    .entry(name.clone())
                    .or_default()
                    .push(handle.id);
            }
            self.request_thumbnail(card_ids[index], name, bytes, cx);
        }
    }
}
