//! PDFium library loader with platform-specific search paths.
//!
//! This module centralizes the logic for locating and loading the PDFium
//! dynamic library across different deployment scenarios.

use pdfium_render::prelude::*;
use std::path::PathBuf;

pub struct PdfiumLoader;

impl PdfiumLoader {
    /// Load the PDFium library from known search paths or system library.
    ///
    /// Search order:
    /// 1. `lib/` in current working directory (development)
    /// 2. `lib/` relative to executable
    /// 3. `Resources/lib/` in macOS bundle
    /// 4. System library fallback
    pub fn load() -> Result<Pdfium, String> {
        for dir in Self::search_dirs() {
            let path = Pdfium::pdfium_platform_library_name_at_path(&dir);
            if path.exists() {
                if let Ok(bindings) = Pdfium::bind_to_library(&path) {
                    return Ok(Pdfium::new(bindings));
                }
            }
        }
        Pdfium::bind_to_system_library()
            .map(Pdfium::new)
            .map_err(|e| format!("Failed to load pdfium: {:?}", e))
    }

    fn search_dirs() -> Vec<PathBuf> {
        let mut dirs = Vec::new();

        // Current working directory (development)
        if let Ok(cwd) = std::env::current_dir() {
            dirs.push(cwd.join("lib"));
        }

        // Executable-relative path
        if let Ok(exe) = std::env::current_exe() {
            if let Some(parent) = exe.parent() {
                dirs.push(parent.join("lib"));

                // macOS bundle path
                if let Some(grandparent) = parent.parent() {
                    dirs.push(grandparent.join("Resources/lib"));
                }
            }
        }

        dirs
    }
}
