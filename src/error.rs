//! Error types for pdf2image-tools

use thiserror::Error;

/// Result type alias for pdf2image-tools
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for pdf2image-tools
#[derive(Error, Debug)]
pub enum Error {
    /// Input file not found
    #[error("File does not exist: {path}")]
    FileNotFound { path: String },

    /// Start page outside the document, or past the end page
    #[error(
        "Invalid starting page {start} (end {end}, {page_count} pages). \
         Must be at least 0 and less than the total page count."
    )]
    InvalidStartPage {
        start: i64,
        end: i64,
        page_count: u32,
    },

    /// End page before the start page, or past the last page
    #[error(
        "Invalid end page {end} (start {start}, {page_count} pages). \
         Must not be before the starting page or past the last page."
    )]
    InvalidEndPage {
        start: i64,
        end: i64,
        page_count: u32,
    },

    /// PDFium could not be bound or the document could not be loaded
    #[error("PDFium error: {reason}")]
    Pdfium { reason: String },

    /// The backend failed to rasterize a page
    #[error("Failed to render page {page}: {reason}")]
    Render { page: u32, reason: String },

    /// The rendered bitmap could not be encoded or written
    #[error("Failed to encode page {page}: {source}")]
    Encode {
        page: u32,
        #[source]
        source: image::ImageError,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for either half of a rejected page range.
    pub fn is_invalid_range(&self) -> bool {
        matches!(
            self,
            Error::InvalidStartPage { .. } | Error::InvalidEndPage { .. }
        )
    }

    /// True when the failure came out of the per-page loop.
    pub fn is_render_failure(&self) -> bool {
        matches!(self, Error::Render { .. } | Error::Encode { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_errors_are_grouped() {
        let start = Error::InvalidStartPage {
            start: -1,
            end: 4,
            page_count: 5,
        };
        let end = Error::InvalidEndPage {
            start: 0,
            end: 9,
            page_count: 5,
        };
        assert!(start.is_invalid_range());
        assert!(end.is_invalid_range());
        assert!(!start.is_render_failure());
    }

    #[test]
    fn test_render_errors_are_grouped() {
        let err = Error::Render {
            page: 3,
            reason: "boom".to_string(),
        };
        assert!(err.is_render_failure());
        assert!(!err.is_invalid_range());
        assert_eq!(err.to_string(), "Failed to render page 3: boom");
    }

    #[test]
    fn test_file_not_found_message() {
        let err = Error::FileNotFound {
            path: "missing.pdf".to_string(),
        };
        assert_eq!(err.to_string(), "File does not exist: missing.pdf");
    }
}
