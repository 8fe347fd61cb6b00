//! Page rasterization loop

use super::format::OutputFormat;
use super::naming::{output_base_name, output_file_name};
use super::range::{resolve_page_range, PageRange, LAST_PAGE};
use crate::error::{Error, Result};
use crate::pdf::{RenderBackend, RenderDocument, RenderOptions};
use std::path::{Path, PathBuf};

/// One conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    /// PDF to rasterize
    pub source_path: PathBuf,
    /// Image format for written pages (default: jpg)
    pub format: OutputFormat,
    /// First zero-based page (default: 0)
    pub start_page: i32,
    /// Last zero-based page, or [`LAST_PAGE`] (default)
    pub end_page: i32,
    /// Directory receiving the images (default: current directory)
    pub output_dir: PathBuf,
}

impl ConversionRequest {
    /// Request for every page of `source_path` as JPEG into the current directory
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            format: OutputFormat::default(),
            start_page: 0,
            end_page: LAST_PAGE,
            output_dir: PathBuf::from("."),
        }
    }
}

/// Progress after a page has been written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Zero-based index of the page just written
    pub page: u32,
    /// Pages written so far in this run (1-based)
    pub current: u32,
    /// Pages in the run
    pub total: u32,
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub range: PageRange,
    /// Files written, in page order
    pub written: Vec<PathBuf>,
}

/// Rasterizes page ranges through a borrowed rendering backend.
pub struct Converter<'b, B: RenderBackend> {
    backend: &'b B,
    options: RenderOptions,
}

impl<'b, B: RenderBackend> Converter<'b, B> {
    pub fn new(backend: &'b B) -> Self {
        Self {
            backend,
            options: RenderOptions::default(),
        }
    }

    /// Rasterize the requested pages, one file per page, in ascending order.
    ///
    /// Nothing is written if the file is missing or the range is invalid.
    /// The first render or encode failure stops the run; pages written before
    /// it stay on disk. Existing files with the same name are overwritten.
    pub fn convert<F>(
        &self,
        request: &ConversionRequest,
        mut on_progress: F,
    ) -> Result<ConversionReport>
    where
        F: FnMut(Progress),
    {
        let source = request.source_path.as_path();
        if !source.exists() {
            return Err(Error::FileNotFound {
                path: source.display().to_string(),
            });
        }

        let document = self.backend.open_document(source)?;
        let page_count = document.page_count();
        let range = resolve_page_range(request.start_page, request.end_page, page_count)?;

        tracing::info!(
            source = %source.display(),
            page_count,
            start = range.start(),
            end = range.end(),
            format = %request.format,
            "converting pages"
        );

        if !request.output_dir.as_os_str().is_empty() {
            std::fs::create_dir_all(&request.output_dir)?;
        }

        let base = output_base_name(source);
        let total = range.page_count();
        let mut written = Vec::with_capacity(total as usize);

        for (done, page) in range.iter().enumerate() {
            let path = request
                .output_dir
                .join(output_file_name(&base, page, request.format));

            if let Err(e) = self.write_page(&document, page, request.format, &path) {
                tracing::warn!(page, written = written.len(), error = %e, "conversion aborted");
                return Err(e);
            }

            tracing::debug!(page, path = %path.display(), "page written");
            written.push(path);
            on_progress(Progress {
                page,
                current: done as u32 + 1,
                total,
            });
        }

        tracing::info!(pages = written.len(), "conversion finished");
        Ok(ConversionReport { range, written })
    }

    fn write_page<D: RenderDocument>(
        &self,
        document: &D,
        page: u32,
        format: OutputFormat,
        path: &Path,
    ) -> Result<()> {
        let bitmap = format.prepare(document.render_page(page, &self.options)?);
        bitmap
            .save_with_format(path, format.image_format())
            .map_err(|source| Error::Encode { page, source })
    }
}
