//! Candidate file validation for the upload widget.
//!
//! Pure checks over a candidate's size and MIME type. Rejections carry the
//! exact message shown inline in the upload widget; nothing here touches the
//! catalog.

use crate::constants::MAX_FILE_SIZE;
use std::path::Path;
use thiserror::Error;

/// Why a candidate file was rejected
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("File size exceeds 25MB limit.")]
    TooLarge,

    #[error("Please upload a PDF file.")]
    NotPdf,
}

/// Check a candidate's size and MIME type against the upload limits.
///
/// Accepts anything at or under 25 MB whose MIME type contains "pdf".
pub fn validate(size: u64, mime_type: &str) -> Result<(), ValidationError> {
    if size > MAX_FILE_SIZE {
        return Err(ValidationError::TooLarge);
    }
    if !mime_type.contains("pdf") {
        return Err(ValidationError::NotPdf);
    }
    Ok(())
}

/// Derive a MIME type from a path's extension.
///
/// OS drops and the file picker hand us paths, not typed files, so the type
/// is inferred the same way a browser would for an `.pdf` candidate.
pub fn mime_type_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .as_deref()
    {
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}
