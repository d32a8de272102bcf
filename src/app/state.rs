//! Application state - the Courseshelf struct definition and sub-structs.

use crate::catalog::CatalogStore;
use crate::preview::PreviewServer;
use std::collections::HashMap;
use std::path::PathBuf;

// =============================================================================
// Sub-structs composing the Courseshelf root entity
// =============================================================================

/// Upload widget state - drag status and validation outcome
#[derive(Default)]
pub struct UploadState {
    /// Whether an external drag is currently over the drop zone
    pub drag_active: bool,
    /// Name of the most recently accepted file, shown in the drop zone
    pub selected_name: Option<String>,
    /// Inline rejection message from the validator, if any
    pub error: Option<String>,
}

/// Coursework card state - per-card identity, thumbnails, render generations
#[derive(Default)]
pub struct CardsState {
    /// Runtime card ids, aligned index-for-index with the catalog's records.
    /// Names may repeat; ids never do, so records sharing a name keep
    /// distinct thumbnails and click-throughs.
    ids: Vec<u64>,
    /// Rendered first-page thumbnails keyed by card id
    pub thumbnails: HashMap<u64, PathBuf>,
    /// Current render generation per card id; results from any other
    /// generation are stale and discarded instead of installed
    pub generations: HashMap<u64, u64>,
    /// Monotonic source for card ids
    next_id: u64,
    /// Monotonic source for generation stamps
    next_generation: u64,
}

impl CardsState {
    /// Mint the card id for a newly appended record.
    pub fn push_id(&mut self) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.ids.push(id);
        id
    }

    /// Card ids in catalog order.
    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    /// Stamp a new render generation for `card_id`, invalidating in-flight
    /// ones.
    pub fn bump_generation(&mut self, card_id: u64) -> u64 {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.generations.insert(card_id, generation);
        generation
    }

    /// Forget everything rendered for `card_id`; stale results will be
    /// dropped. Returns the installed thumbnail path for file cleanup.
    pub fn forget(&mut self, card_id: u64) -> Option<PathBuf> {
        self.ids.retain(|id| *id != card_id);
        self.generations.remove(&card_id);
        self.thumbnails.remove(&card_id)
    }

    /// Forget every card. Returns the installed thumbnail paths for file
    /// cleanup.
    pub fn forget_all(&mut self) -> Vec<PathBuf> {
        self.ids.clear();
        self.generations.clear();
        self.thumbnails.drain().map(|(_, path)| path).collect()
    }
}

/// System state - preview server, cache paths, status reporting
pub struct SystemState {
    /// In-process server minting display handles; None if the port bind failed
    pub preview: Option<PreviewServer>,
    /// Preview-server document ids per record name, released on remove/clear
    pub preview_ids: HashMap<String, Vec<u64>>,
    /// Directory receiving rendered first-page PNGs
    pub thumbnail_dir: PathBuf,
    /// Last persistence failure, surfaced in the header
    pub status: Option<String>,
}

/// Main application state - composed of focused sub-structs
pub struct Courseshelf {
    /// The uploaded-file catalog with its injected repository
    pub store: CatalogStore,
    /// Upload widget state
    pub upload: UploadState,
    /// Coursework card state
    pub cards: CardsState,
    /// System state
    pub system: SystemState,
}
