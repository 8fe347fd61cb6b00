//! pdf2image-tools
//!
//! Two small programs sharing one crate:
//! - `pdf2image`: rasterize a range of PDF pages to bmp/png/gif/jpeg files
//! - `reverse-service`: HTTP endpoint that returns a form field reversed

pub mod cli;
pub mod convert;
pub mod error;
pub mod pdf;
pub mod web;

pub use convert::{
    resolve_page_range, ConversionReport, ConversionRequest, Converter, OutputFormat, PageRange,
    Progress, LAST_PAGE,
};
pub use error::{Error, Result};
pub use pdf::{PdfiumBackend, RenderBackend, RenderDocument, RenderOptions};
pub use web::{reverse, ServiceConfig};

/// Install the stderr tracing subscriber used by both binaries.
///
/// `RUST_LOG` overrides the default `pdf2image_tools=info` filter.
pub fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
