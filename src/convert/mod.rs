//! PDF to image conversion
//!
//! Range validation, format selection, output naming and the sequential
//! rasterization loop.

mod format;
mod naming;
mod range;
mod rasterize;

pub use format::OutputFormat;
pub use naming::{output_base_name, output_file_name};
pub use range::{resolve_page_range, PageRange, LAST_PAGE};
pub use rasterize::{ConversionReport, ConversionRequest, Converter, Progress};
