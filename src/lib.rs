//! Courseshelf - a desktop shelf for PDF coursework.
//!
//! Drop or pick a PDF, the catalog persists its metadata and payload to a
//! single JSON slot, and each entry renders its first page as a card
//! thumbnail via PDFium.

pub mod app;
pub mod catalog;
pub mod constants;
pub mod pdf;
pub mod preview;
pub mod render;
pub mod validate;
