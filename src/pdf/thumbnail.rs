//! First-page rendering for coursework cards.

use crate::pdf::PdfiumLoader;
use anyhow::{Result, anyhow};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use pdfium_render::prelude::*;
use std::path::Path;

// PDFium itself is not thread-safe; renders run on background threads, so
// every call ties the library down behind one process-wide lock.
static PDFIUM_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Render page 1 of a PDF, at the page's natural (scale 1.0) size, to a PNG
/// at `out_path`. Returns the rendered dimensions in pixels.
pub fn render_first_page(bytes: &[u8], out_path: &Path) -> Result<(u32, u32)> {
    let _guard = PDFIUM_LOCK.lock();

    let pdfium = PdfiumLoader::load().map_err(|e| anyhow!(e))?;
    let document = pdfium.load_pdf_from_byte_slice(bytes, None)?;
    let page = document.pages().get(0)?;

    // Natural viewport: PDF points at 72 DPI map one-to-one onto pixels.
    let width = page.width().value.round().max(1.0) as i32;
    let height = page.height().value.round().max(1.0) as i32;

    let render_config = PdfRenderConfig::new()
        .set_target_width(width)
        .set_target_height(height);

    let bitmap = page.render_with_config(&render_config)?;
    let image = bitmap.as_image();
    image.save(out_path)?;

    Ok((width as u32, height as u32))
}
