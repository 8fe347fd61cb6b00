//! Command line for `pdf2image`

use crate::convert::{ConversionRequest, OutputFormat, LAST_PAGE};
use clap::Parser;
use std::path::PathBuf;

pub const USAGE: &str = "\
pdf2image parameters:
Usage:  \"pdf2image [FileName] [(Optional) Format] [(Optional) Start Page] [(Optional) End Page]\".
Entering End Page as -1 converts all pages.";

/// Rasterize a range of PDF pages to image files.
///
/// Pages are zero-based; each page is written as
/// `<input name><page, 4 digits>.<format>`.
#[derive(Debug, Parser)]
#[command(name = "pdf2image", version)]
pub struct Cli {
    /// PDF file to convert
    pub input: Option<PathBuf>,

    /// bmp, png, gif, jpg or jpeg (anything else: jpg)
    pub format: Option<String>,

    /// First page to convert (0 is the first page)
    #[arg(allow_hyphen_values = true)]
    pub start_page: Option<String>,

    /// Last page to convert, -1 for the last page of the document
    #[arg(allow_hyphen_values = true)]
    pub end_page: Option<String>,

    /// Directory to write images into
    #[arg(long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,

    /// Directory containing the PDFium shared library
    #[arg(long, env = "PDFIUM_DYNAMIC_LIB_PATH")]
    pub pdfium_dir: Option<PathBuf>,

    /// Wait for Enter before exiting
    #[arg(long)]
    pub wait: bool,
}

/// Parse a page argument, keeping `default` when it is not a number.
pub fn parse_page_arg(value: Option<&str>, default: i32) -> i32 {
    match value {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(page) => page,
            Err(_) => {
                tracing::warn!("{} is not a valid number.", raw);
                default
            }
        },
    }
}

impl Cli {
    /// Build the conversion request, or `None` when no input was given.
    pub fn to_request(&self) -> Option<ConversionRequest> {
        let input = self.input.as_ref()?;
        Some(ConversionRequest {
            source_path: input.clone(),
            format: self
                .format
                .as_deref()
                .map(OutputFormat::from_token)
                .unwrap_or_default(),
            start_page: parse_page_arg(self.start_page.as_deref(), 0),
            end_page: parse_page_arg(self.end_page.as_deref(), LAST_PAGE),
            output_dir: self.output_dir.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pdf2image").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_arguments_gives_no_request() {
        let cli = parse(&[]);
        assert!(cli.to_request().is_none());
    }

    #[test]
    fn test_input_only_uses_defaults() {
        let request = parse(&["TestFile.pdf"]).to_request().unwrap();
        assert_eq!(request, ConversionRequest::new("TestFile.pdf"));
    }

    #[test]
    fn test_all_positionals() {
        let request = parse(&["in.pdf", "PNG", "3", "-1"]).to_request().unwrap();
        assert_eq!(request.format, OutputFormat::Png);
        assert_eq!(request.start_page, 3);
        assert_eq!(request.end_page, LAST_PAGE);
    }

    #[test]
    fn test_non_numeric_pages_keep_defaults() {
        let request = parse(&["in.pdf", "gif", "first", "last"]).to_request().unwrap();
        assert_eq!(request.start_page, 0);
        assert_eq!(request.end_page, LAST_PAGE);
    }

    #[test]
    fn test_hyphenated_garbage_pages_keep_defaults() {
        let request = parse(&["in.pdf", "jpg", "-x"]).to_request().unwrap();
        assert_eq!(request.start_page, 0);

        let request = parse(&["in.pdf", "jpg", "2", "-1a"]).to_request().unwrap();
        assert_eq!(request.start_page, 2);
        assert_eq!(request.end_page, LAST_PAGE);
    }

    #[test]
    fn test_flags_after_page_arguments() {
        let cli = parse(&["in.pdf", "png", "0", "-1", "--wait", "-o", "out"]);
        assert!(cli.wait);
        let request = cli.to_request().unwrap();
        assert_eq!(request.end_page, LAST_PAGE);
        assert_eq!(request.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_unknown_format_falls_back_to_jpg() {
        let request = parse(&["in.pdf", "tiff"]).to_request().unwrap();
        assert_eq!(request.format, OutputFormat::default());
    }

    #[test]
    fn test_output_dir_and_wait() {
        let cli = parse(&["in.pdf", "--output-dir", "out", "--wait"]);
        assert!(cli.wait);
        assert_eq!(cli.to_request().unwrap().output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_parse_page_arg() {
        assert_eq!(parse_page_arg(None, 7), 7);
        assert_eq!(parse_page_arg(Some("12"), 0), 12);
        assert_eq!(parse_page_arg(Some(" 5 "), 0), 5);
        assert_eq!(parse_page_arg(Some("-1"), 0), -1);
        assert_eq!(parse_page_arg(Some("1.5"), -1), -1);
    }
}
