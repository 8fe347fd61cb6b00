//! Rendering capability seam
//!
//! The converter only ever talks to these traits. [`PdfiumBackend`](super::PdfiumBackend)
//! is the production adapter; tests plug in an in-memory backend.

use crate::error::Result;
use image::DynamicImage;
use std::path::Path;

/// PDF user-space units per inch
const PDF_POINTS_PER_INCH: f32 = 72.0;

/// Fixed rasterization settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Horizontal resolution in dots per inch
    pub resolution_x: u32,
    /// Vertical resolution in dots per inch
    pub resolution_y: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            resolution_x: 300,
            resolution_y: 300,
        }
    }
}

impl RenderOptions {
    /// Pixel size of a page measured in points at these resolutions.
    pub fn target_size(&self, width_points: f32, height_points: f32) -> (i32, i32) {
        (
            points_to_pixels(width_points, self.resolution_x),
            points_to_pixels(height_points, self.resolution_y),
        )
    }
}

fn points_to_pixels(points: f32, dpi: u32) -> i32 {
    let pixels = (points / PDF_POINTS_PER_INCH * dpi as f32).round();
    pixels.max(1.0) as i32
}

/// Something that can open documents for rasterization.
///
/// The backend owns the native library. Documents borrow it, so a document
/// can never outlive the engine that loaded it.
pub trait RenderBackend {
    type Document<'a>: RenderDocument
    where
        Self: 'a;

    /// Open the document at `path`.
    fn open_document(&self, path: &Path) -> Result<Self::Document<'_>>;
}

/// An open document handle.
///
/// Dropping the handle closes the document.
pub trait RenderDocument {
    /// Total number of pages.
    fn page_count(&self) -> u32;

    /// Rasterize the zero-based page `index`.
    ///
    /// Any per-page native resources are released before this returns; the
    /// caller owns the returned bitmap.
    fn render_page(&self, index: u32, options: &RenderOptions) -> Result<DynamicImage>;
}
