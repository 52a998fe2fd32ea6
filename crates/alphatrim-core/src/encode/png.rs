//! PNG encoding for trimmed output.
//!
//! PNG is lossless and carries a full alpha channel, so the cropped pixels are
//! written exactly as they were copied.

use std::io::{Cursor, Write};

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use thiserror::Error;

use crate::transform::TrimmedImage;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

fn validate(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * 4;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    Ok(())
}

/// Encode RGBA pixel data as PNG into `writer`.
///
/// The writer is flushed before returning, so a buffered file writer has
/// reached the OS when this returns `Ok`.
///
/// # Arguments
///
/// * `writer` - Destination for the encoded bytes
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
pub fn write_png_pixels<W: Write>(
    mut writer: W,
    pixels: &[u8],
    width: u32,
    height: u32,
) -> Result<(), EncodeError> {
    validate(pixels, width, height)?;

    PngEncoder::new(&mut writer)
        .write_image(pixels, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    writer
        .flush()
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))
}

/// Encode a trimmed image as PNG into `writer`.
pub fn write_png<W: Write>(writer: W, image: &TrimmedImage) -> Result<(), EncodeError> {
    write_png_pixels(writer, &image.pixels, image.width, image.height)
}

/// Encode RGBA pixel data to PNG bytes.
///
/// # Example
///
/// ```
/// use alphatrim_core::encode::encode_png;
///
/// let pixels = vec![255u8; 10 * 10 * 4]; // Opaque white image
/// let png = encode_png(&pixels, 10, 10).unwrap();
///
/// // Verify PNG signature
/// assert_eq!(&png[0..4], &[0x89, b'P', b'N', b'G']);
/// ```
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    let mut buffer = Cursor::new(Vec::new());
    write_png_pixels(&mut buffer, pixels, width, height)?;
    Ok(buffer.into_inner())
}
