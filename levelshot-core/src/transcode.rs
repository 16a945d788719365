//! Conversion of legacy TGA levelshots to JPEG.

use image::codecs::jpeg::JpegEncoder;
use image::ImageFormat;

use crate::error::{Error, Result};

/// JPEG quality used for converted levelshots.
pub const JPEG_QUALITY: u8 = 75;

/// Turns an image in a legacy format into an image in the output format.
pub trait Transcoder {
    /// Decodes `bytes`, converts them to 3-channel RGB and encodes the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if `bytes` are not a valid source image and
    /// [`Error::Encode`] if the output format cannot be produced.
    fn transcode(&self, bytes: &[u8]) -> Result<Vec<u8>>;
}

/// Transcoder from TGA to baseline JPEG.
///
/// Any alpha channel is dropped; grayscale and palette images are expanded to
/// RGB before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TgaToJpeg {
    quality: u8,
}

impl TgaToJpeg {
    /// Creates a transcoder with the default [`JPEG_QUALITY`].
    pub fn new() -> Self {
        Self {
            quality: JPEG_QUALITY,
        }
    }

    /// JPEG quality used by this transcoder.
    pub fn quality(&self) -> u8 {
        self.quality
    }
}

impl Default for TgaToJpeg {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcoder for TgaToJpeg {
    fn transcode(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        let decoded =
            image::load_from_memory_with_format(bytes, ImageFormat::Tga).map_err(Error::Decode)?;
        let rgb = decoded.into_rgb8();

        let mut encoded = Vec::new();
        JpegEncoder::new_with_quality(&mut encoded, self.quality)
            .encode_image(&rgb)
            .map_err(Error::Encode)?;

        Ok(encoded)
    }
}
