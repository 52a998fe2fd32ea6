//! Format-sniffing decoder built on the `image` crate.

use std::io::{BufRead, Cursor, Seek};

use image::{ImageError, ImageReader};

use super::{DecodeError, DecodedImage};

/// Decode an image from a buffered, seekable reader.
///
/// The format is guessed from the leading magic bytes, not from a file
/// extension.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if no enabled codec recognizes the data.
/// Returns `DecodeError::CorruptedFile` if the codec rejects the data.
/// Returns `DecodeError::LimitsExceeded` if the codec cannot allocate the image.
/// Returns `DecodeError::Io` if reading fails.
pub fn decode_image<R: BufRead + Seek>(reader: R) -> Result<DecodedImage, DecodeError> {
    let mut reader = ImageReader::new(reader)
        .with_guessed_format()
        .map_err(|e| DecodeError::Io(e.to_string()))?;
    // Image size is bounded only by available memory
    reader.no_limits();

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader.decode().map_err(map_image_error)?;
    log::debug!(
        "decoded {}x{} image ({:?})",
        img.width(),
        img.height(),
        img.color()
    );

    Ok(DecodedImage::from_dynamic(img))
}

/// Decode an image held entirely in memory.
pub fn decode_bytes(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    decode_image(Cursor::new(bytes))
}

fn map_image_error(err: ImageError) -> DecodeError {
    match err {
        ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        ImageError::IoError(e) => DecodeError::Io(e.to_string()),
        ImageError::Limits(e) => DecodeError::LimitsExceeded(e.to_string()),
        other => DecodeError::CorruptedFile(other.to_string()),
    }
}
