//! Output file naming

use super::format::OutputFormat;
use std::path::Path;

/// Base name for output files: the input's file name without its extension.
pub fn output_base_name(source: &Path) -> String {
    source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `<base><page, zero-padded to 4 digits>.<ext>`
///
/// Indices of 10000 and above keep all their digits.
pub fn output_file_name(base: &str, page: u32, format: OutputFormat) -> String {
    format!("{}{:04}.{}", base, page, format.extension())
}
