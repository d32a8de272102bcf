//! Application module - the main Courseshelf application state and logic.
//!
//! This module is organized into several submodules:
//! - `state` - The Courseshelf struct definition and sub-structs
//! - `lifecycle` - Initialization and catalog re-hydration
//! - `uploads` - Drop/picker ingestion and catalog mutations
//! - `cards` - First-page render requests and the click-through

mod cards;
mod lifecycle;
mod state;
mod uploads;

pub use state::{CardsState, Courseshelf, SystemState, UploadState};
