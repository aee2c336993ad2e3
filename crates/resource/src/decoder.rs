//! Intrinsic image dimension probing.
//!
//! The layout engine needs an image's pixel width and height to derive the
//! placed height from the anchor width. Decoding happens behind the
//! [`ImageDecoder`] trait; the default implementation reads only the header
//! via the `image` crate, never the full pixel data.

use image::ImageReader;
use std::fmt::Debug;
use std::io::Cursor;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ImageDecodeError {
    #[error("could not determine image format of '{image_source}'")]
    UnknownFormat { image_source: String },

    #[error("failed to decode image '{image_source}': {message}")]
    Decode { image_source: String, message: String },
}

/// Reports an image's intrinsic pixel dimensions.
pub trait ImageDecoder: Send + Sync + Debug {
    /// `(width, height)` in pixels for the given image bytes. `source` is
    /// the declared path, used for error context only.
    fn dimensions(&self, source: &str, data: &[u8]) -> Result<(u32, u32), ImageDecodeError>;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;
}

/// Header-only prober backed by the `image` crate's format sniffing.
#[derive(Debug, Default)]
pub struct HeaderImageDecoder;

impl HeaderImageDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl ImageDecoder for HeaderImageDecoder {
    fn dimensions(&self, source: &str, data: &[u8]) -> Result<(u32, u32), ImageDecodeError> {
        let reader = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| ImageDecodeError::Decode {
                image_source: source.to_string(),
                message: e.to_string(),
            })?;

        if reader.format().is_none() {
            return Err(ImageDecodeError::UnknownFormat {
                image_source: source.to_string(),
            });
        }

        reader
            .into_dimensions()
            .map_err(|e| ImageDecodeError::Decode {
                image_source: source.to_string(),
                message: e.to_string(),
            })
    }

    fn name(&self) -> &'static str {
        "HeaderImageDecoder"
    }
}
