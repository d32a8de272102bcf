//! Coursework card render requests and the click-through.
//!
//! Each request renders page 1 on the background executor and installs the
//! result only if its generation stamp is still current. A record that was
//! removed or re-rendered in the meantime leaves the stale result on the
//! floor instead of writing to a surface nothing displays anymore.

use super::Courseshelf;
use gpui::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error};

impl Courseshelf {
    /// Kick off an asynchronous first-page render for the card.
    pub fn request_thumbnail(
        &mut self,
        card_id: u64,
        name: String,
        bytes: Arc<Vec<u8>>,
        cx: &mut Context<Self>,
    ) {
        let generation = self.cards.bump_generation(card_id);
        let out_path = self.system.thumbnail_dir.join(format!(
            "{}-{card_id}-{generation}.png",
            sanitize_file_stem(&name)
        ));

        let render = cx.background_spawn(async move {
            crate::pdf::render_first_page(&bytes, &out_path).map(|size| (out_path, size))
        });
        cx.spawn(async move |this, cx| {
            let result = render.await;
            this.update(cx, |this, cx| match result {
                Ok((path, (width, height))) => {
                    if this.cards.generations.get(&card_id) == Some(&generation) {
                        debug!("installed {width}x{height} first page for {name:?}");
                        if let Some(replaced) = this.cards.thumbnails.insert(card_id, path) {
                            remove_thumbnail_file(&replaced);
                        }
                        cx.notify();
                    } else {
                        debug!("discarding stale first-page render for {name:?}");
                        remove_thumbnail_file(&path);
                    }
                }
                Err(err) => {
                    error!("first-page render failed for {name:?}: {err}");
                }
            })
            .ok();
        })
        .detach();
    }

    /// Open the full document behind a card's display handle.
    pub fn open_document(&mut self, card_id: u64, _cx: &mut Context<Self>) {
        let handle = self
            .cards
            .ids()
            .iter()
            .position(|id| *id == card_id)
            .and_then(|index| self.store.records().get(index))
            .and_then(|record| record.display_handle.clone());

        match handle {
            Some(url) => {
                if let Err(err) = open::that(&url) {
                    error!("could not open {url}: {err}");
                }
            }
            None => debug!("no display handle for card {card_id}, nothing to open"),
        }
    }

    /// Rendered thumbnail path for a card, if its render has completed.
    pub fn thumbnail_for(&self, card_id: u64) -> Option<PathBuf> {
        self.cards.thumbnails.get(&card_id).cloned()
    }
}

/// Best-effort removal of a thumbnail PNG nothing displays anymore.
pub(super) fn remove_thumbnail_file(path: &Path) {
    if let Err(err) = std::fs::remove_file(path) {
        if err.kind() != std::io::ErrorKind::NotFound {
            debug!("could not remove thumbnail {path:?}: {err}");
        }
    }
}

/// Keep thumbnail filenames filesystem-safe regardless of the record name.
fn sanitize_file_stem(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
