//! Core types for image decoding.

use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// The image is too large for the codec to allocate.
    #[error("Image exceeds decoder limits: {0}")]
    LimitsExceeded(String),

    /// I/O error while reading the encoded bytes.
    #[error("I/O error: {0}")]
    Io(String),
}

/// Reduce a 16-bit channel sample to 8-bit precision by keeping the high byte.
///
/// Every visibility test and every copied channel goes through this function,
/// so scan and crop always agree on what a sample is worth.
#[inline]
pub fn channel_to_u8(value: u16) -> u8 {
    (value >> 8) as u8
}

/// A decoded image with RGBA samples at 16-bit precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA samples in row-major order (4 samples per pixel).
    /// Length should be width * height * 4.
    pub pixels: Vec<u16>,
}

impl DecodedImage {
    /// Create a new DecodedImage with the given dimensions and sample data.
    pub fn new(width: u32, height: u32, pixels: Vec<u16>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * 4,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a DecodedImage from any decoded `image` buffer.
    ///
    /// 8-bit sources are widened with the `image` crate's `v * 257` rule, so
    /// narrowing with [`channel_to_u8`] gives back the original byte.
    pub fn from_dynamic(img: image::DynamicImage) -> Self {
        let rgba = img.into_rgba16();
        let (width, height) = rgba.dimensions();
        Self {
            width,
            height,
            pixels: rgba.into_raw(),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_rgba8(img: image::RgbaImage) -> Self {
        Self::from_dynamic(image::DynamicImage::ImageRgba8(img))
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Read the four 16-bit channels of the pixel at `(x, y)`.
    #[inline]
    pub fn rgba16_at(&self, x: u32, y: u32) -> [u16; 4] {
        let i = self.offset(x, y);
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Read the pixel at `(x, y)` reduced to 8-bit precision.
    #[inline]
    pub fn rgba8_at(&self, x: u32, y: u32) -> [u8; 4] {
        self.rgba16_at(x, y).map(channel_to_u8)
    }

    /// Read the alpha channel at `(x, y)` reduced to 8-bit precision.
    #[inline]
    pub fn alpha8_at(&self, x: u32, y: u32) -> u8 {
        channel_to_u8(self.pixels[self.offset(x, y) + 3])
    }
}
