//! PDF first-page rendering using pdfium.
//!
//! This module provides PDF handling for coursework cards:
//!
//! - `thumbnail` - First-page rendering at the page's natural size
//! - `pdfium_loader` - Shared PDFium library loading logic
//!
//! PDFium is treated as an opaque collaborator; the only call sequence used
//! is open document, take page 1, render at its natural viewport.

mod pdfium_loader;
mod thumbnail;

pub use pdfium_loader::PdfiumLoader;
pub use thumbnail::render_first_page;
