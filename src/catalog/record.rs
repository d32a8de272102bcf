//! The FileRecord data model.

use crate::catalog::CatalogResult;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// One uploaded document in the catalog.
///
/// `display_handle` is a runtime-only preview URL and never reaches the
/// persisted slot; `encoded_payload` is the durable base64 copy of the file
/// bytes that survives restarts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Original filename, not guaranteed unique
    pub name: String,
    /// Byte count of the original file
    pub size: u64,
    /// MIME type derived from the source file
    pub mime_type: String,
    /// Ephemeral preview URL served by the in-process preview server
    #[serde(skip)]
    pub display_handle: Option<String>,
    /// Base64 encoding of the full byte content
    pub encoded_payload: String,
}

impl FileRecord {
    /// Build a record from raw file bytes, encoding the durable payload.
    pub fn from_bytes(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: &[u8],
    ) -> Self {
        Self {
            name: name.into(),
            size: bytes.len() as u64,
            mime_type: mime_type.into(),
            display_handle: None,
            encoded_payload: STANDARD.encode(bytes),
        }
    }

    /// Decode the durable payload back into raw bytes.
    pub fn decode_payload(&self) -> CatalogResult<Vec<u8>> {
        Ok(STANDARD.decode(&self.encoded_payload)?)
    }
}
