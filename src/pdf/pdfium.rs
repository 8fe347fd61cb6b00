//! PDFium adapter for the rendering backend

use super::backend::{RenderBackend, RenderDocument, RenderOptions};
use crate::error::{Error, Result};
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};

/// Environment variable naming a directory that holds the PDFium library
const PDFIUM_LIB_ENV: &str = "PDFIUM_DYNAMIC_LIB_PATH";

/// Rendering backend over a bound PDFium library.
///
/// Construct it once, pass it by reference to the converter and drop it when
/// the run is over; the library is unbound on drop.
pub struct PdfiumBackend {
    pdfium: Pdfium,
}

impl PdfiumBackend {
    /// Bind PDFium from the default search locations.
    pub fn new() -> Result<Self> {
        Self::with_library_dir(None::<PathBuf>)
    }

    /// Bind PDFium, trying `dir` before the default search locations.
    ///
    /// Search order: `dir`, `$PDFIUM_DYNAMIC_LIB_PATH`, `./`, `/opt/pdfium/lib`,
    /// then the system library.
    pub fn with_library_dir<P: AsRef<Path>>(dir: Option<P>) -> Result<Self> {
        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Some(dir) = dir {
            candidates.push(dir.as_ref().to_path_buf());
        }
        if let Ok(dir) = std::env::var(PDFIUM_LIB_ENV) {
            candidates.push(PathBuf::from(dir));
        }
        candidates.push(PathBuf::from("./"));
        candidates.push(PathBuf::from("/opt/pdfium/lib"));

        for dir in &candidates {
            let library = Pdfium::pdfium_platform_library_name_at_path(dir);
            match Pdfium::bind_to_library(&library) {
                Ok(bindings) => {
                    tracing::debug!(library = %library.display(), "bound PDFium");
                    return Ok(Self {
                        pdfium: Pdfium::new(bindings),
                    });
                }
                Err(e) => {
                    tracing::debug!(library = %library.display(), error = %e, "PDFium not found");
                }
            }
        }

        let bindings = Pdfium::bind_to_system_library().map_err(|e| Error::Pdfium {
            reason: format!("Failed to initialize PDFium: {}", e),
        })?;
        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }
}

impl RenderBackend for PdfiumBackend {
    type Document<'a> = PdfiumDocument<'a>;

    fn open_document(&self, path: &Path) -> Result<PdfiumDocument<'_>> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| Error::Pdfium {
                reason: format!("Failed to open {}: {}", path.display(), e),
            })?;
        let page_count = document.pages().len() as u32;

        Ok(PdfiumDocument {
            document,
            page_count,
        })
    }
}

/// A PDF loaded by [`PdfiumBackend`]
pub struct PdfiumDocument<'a> {
    document: PdfDocument<'a>,
    page_count: u32,
}

impl RenderDocument for PdfiumDocument<'_> {
    fn page_count(&self) -> u32 {
        self.page_count
    }

    fn render_page(&self, index: u32, options: &RenderOptions) -> Result<DynamicImage> {
        if index >= self.page_count {
            return Err(Error::Render {
                page: index,
                reason: format!("page out of bounds (total: {})", self.page_count),
            });
        }

        let pages = self.document.pages();
        let page = pages.get(index as u16).map_err(|e| Error::Render {
            page: index,
            reason: format!("{}", e),
        })?;

        let (width, height) = options.target_size(page.width().value, page.height().value);
        let config = PdfRenderConfig::new()
            .set_target_size(width, height)
            .render_form_data(true)
            .render_annotations(true);

        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| Error::Render {
                page: index,
                reason: format!("{}", e),
            })?;

        // page and bitmap are released here; the image owns its own pixels
        Ok(bitmap.as_image())
    }
}
