//! PDF rendering layer
//!
//! A small trait seam over the rendering engine, and its PDFium adapter.

mod backend;
mod pdfium;

pub use backend::{RenderBackend, RenderDocument, RenderOptions};
pub use pdfium::PdfiumBackend;
