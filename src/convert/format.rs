//! Output image format selection

use image::{DynamicImage, ImageFormat};

/// Image format for written pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Bmp,
    Png,
    Gif,
    /// JPEG, remembering whether the caller spelled it `jpg` or `jpeg`
    Jpeg { long_extension: bool },
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Jpeg {
            long_extension: false,
        }
    }
}

impl OutputFormat {
    /// Select a format from a user token, ignoring case.
    ///
    /// Unrecognized tokens (including padded ones like `" png "`) select JPEG.
    pub fn from_token(token: &str) -> Self {
        match token.to_ascii_lowercase().as_str() {
            "bmp" => OutputFormat::Bmp,
            "png" => OutputFormat::Png,
            "gif" => OutputFormat::Gif,
            "jpeg" => OutputFormat::Jpeg {
                long_extension: true,
            },
            _ => OutputFormat::default(),
        }
    }

    /// File extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Bmp => "bmp",
            OutputFormat::Png => "png",
            OutputFormat::Gif => "gif",
            OutputFormat::Jpeg {
                long_extension: true,
            } => "jpeg",
            OutputFormat::Jpeg {
                long_extension: false,
            } => "jpg",
        }
    }

    pub fn image_format(&self) -> ImageFormat {
        match self {
            OutputFormat::Bmp => ImageFormat::Bmp,
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Gif => ImageFormat::Gif,
            OutputFormat::Jpeg { .. } => ImageFormat::Jpeg,
        }
    }

    /// Convert `image` to a pixel layout the encoder accepts.
    pub fn prepare(&self, image: DynamicImage) -> DynamicImage {
        match self {
            // no alpha channel in JPEG
            OutputFormat::Jpeg { .. } if image.color().has_alpha() => {
                DynamicImage::ImageRgb8(image.to_rgb8())
            }
            _ => image,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}
