//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Upload Limits
// ============================================================================

/// Maximum accepted file size in bytes (25 MB)
pub const MAX_FILE_SIZE: u64 = 25 * 1024 * 1024;

// ============================================================================
// Persistence
// ============================================================================

/// Directory name under the platform data/cache dirs
pub const APP_DIR: &str = "courseshelf";

/// File name of the persisted catalog slot
pub const CATALOG_SLOT_FILE: &str = "uploaded_files.json";

/// Directory name for rendered first-page thumbnails (under the cache dir)
pub const THUMBNAIL_DIR: &str = "thumbnails";

// ============================================================================
// Layout Constants
// ============================================================================

/// Height of the header bar in pixels
pub const HEADER_HEIGHT: f32 = 48.0;

/// Height of the upload drop zone in pixels
pub const UPLOAD_ZONE_HEIGHT: f32 = 150.0;

/// Maximum width of a coursework card in pixels
pub const CARD_MAX_WIDTH: f32 = 680.0;

/// Width reserved for the first-page thumbnail inside a card
pub const CARD_THUMB_WIDTH: f32 = 150.0;

/// Height reserved for the first-page thumbnail inside a card
pub const CARD_THUMB_HEIGHT: f32 = 200.0;

// ============================================================================
// UI Spacing Constants (for visual consistency)
// ============================================================================

/// Border radius - Medium (buttons, chips)
pub const BORDER_RADIUS_MD: f32 = 6.0;

/// Border radius - Large (drop zone, thumbnails)
pub const BORDER_RADIUS_LG: f32 = 10.0;

/// Border radius - Extra Large (cards)
pub const BORDER_RADIUS_XL: f32 = 12.0;

/// Padding - Small
pub const PADDING_SM: f32 = 8.0;

/// Padding - Large
pub const PADDING_LG: f32 = 16.0;

/// Gap spacing - Small
pub const GAP_SM: f32 = 4.0;

/// Gap spacing - Medium
pub const GAP_MD: f32 = 8.0;

/// Gap spacing - Large
pub const GAP_LG: f32 = 12.0;
