//! The uploaded-file catalog and its persistence.
//!
//! This module is organized into several submodules:
//! - `record` - The FileRecord data model
//! - `repository` - The persisted-slot interface and its JSON file backend
//! - `store` - The CatalogStore with add/remove/clear write-through semantics
//! - `error` - Typed errors for catalog operations

mod error;
mod record;
mod repository;
mod store;

pub use error::{CatalogError, CatalogResult};
pub use record::FileRecord;
pub use repository::{CatalogRepository, JsonSlotRepository, default_slot_path};
pub use store::CatalogStore;
