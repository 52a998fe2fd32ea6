//! Cropped copy of a decoded image.
//!
//! The copy re-bases the selected rectangle to a (0, 0) origin and writes
//! every channel at 8-bit precision. Values are carried over exactly: no
//! blending, no resampling, no color adjustment.

use crate::decode::DecodedImage;

use super::bounds::{find_visible_bounds, BoundingRect, CropError};

/// An 8-bit RGBA image produced by cropping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimmedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    pub pixels: Vec<u8>,
}

#[cfg(test)]
impl TrimmedImage {
    /// Read the pixel at `(x, y)`.
    pub(crate) fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    pub(crate) fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub(crate) fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }
}

/// Copy the pixels inside `rect` into a new image.
///
/// # Panics
///
/// Panics if `rect` is inverted or extends past the image. Callers obtain the
/// rect from [`find_visible_bounds`], which never produces either.
pub fn crop_to_rect(image: &DecodedImage, rect: BoundingRect) -> TrimmedImage {
    assert!(
        rect.fits_within(image.width, image.height),
        "crop rect {:?} does not fit a {}x{} image",
        rect,
        image.width,
        image.height
    );

    let out_width = rect.width();
    let out_height = rect.height();
    let mut output = vec![0u8; out_width as usize * out_height as usize * 4];

    // Copy pixel data row by row
    for (dy, row) in output.chunks_exact_mut(out_width as usize * 4).enumerate() {
        let src_y = rect.top + dy as u32;
        for (dx, dst) in row.chunks_exact_mut(4).enumerate() {
            let src_x = rect.left + dx as u32;
            dst.copy_from_slice(&image.rgba8_at(src_x, src_y));
        }
    }

    TrimmedImage {
        width: out_width,
        height: out_height,
        pixels: output,
    }
}

/// Locate the visible content and copy it into a new image.
///
/// # Errors
///
/// Returns `CropError::NoVisiblePixels` for a fully transparent image; no copy
/// is attempted in that case.
pub fn trim_image(image: &DecodedImage) -> Result<(BoundingRect, TrimmedImage), CropError> {
    let rect = find_visible_bounds(image)?;
    Ok((rect, crop_to_rect(image, rect)))
}

#[cfg(test)]
mod tests {
    use super::super::bounds::test_support::{set_rgba8, transparent};
    use super::*;

    /// Create a test image where each pixel has a unique value based on position.
    fn test_image(width: u32, height: u32) -> DecodedImage {
        let mut img = transparent(width, height);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                set_rgba8(&mut img, x, y, [v, v.wrapping_add(1), v.wrapping_add(2), 255]);
            }
        }
        img
    }

    #[test]
    fn test_full_rect_copies_everything() {
        let img = test_image(6, 4);
        let rect = BoundingRect::full(6, 4).unwrap();

        let result = crop_to_rect(&img, rect);

        assert_eq!(result.width, 6);
        assert_eq!(result.height, 4);
        for y in 0..4 {
            for x in 0..6 {
                assert_eq!(result.pixel(x, y), img.rgba8_at(x, y));
            }
        }
    }

    #[test]
    fn test_crop_rebases_origin() {
        let img = test_image(10, 10);
        let rect = BoundingRect {
            left: 3,
            top: 2,
            right: 5,
            bottom: 7,
        };

        let result = crop_to_rect(&img, rect);

        assert_eq!(result.width, 3);
        assert_eq!(result.height, 6);
        // Value at (3, 2) = (2 * 10 + 3) % 256 = 23
        assert_eq!(result.pixel(0, 0), [23, 24, 25, 255]);
        // Value at (5, 7) = 75
        assert_eq!(result.pixel(2, 5), [75, 76, 77, 255]);
        assert_eq!(result.pixels.len(), 3 * 6 * 4);
    }

    #[test]
    fn test_crop_reduces_with_high_byte() {
        let img = DecodedImage::new(1, 1, vec![0x12FF, 0x0001, 0xFF00, 0x80FF]);

        let result = crop_to_rect(&img, BoundingRect::point(0, 0));

        assert_eq!(result.pixel(0, 0), [0x12, 0x00, 0xFF, 0x80]);
    }

    #[test]
    fn test_crop_keeps_transparent_interior_pixels() {
        let mut img = transparent(5, 5);
        set_rgba8(&mut img, 1, 1, [10, 20, 30, 255]);
        set_rgba8(&mut img, 3, 3, [40, 50, 60, 128]);

        let (rect, result) = trim_image(&img).unwrap();

        assert_eq!(rect.width(), 3);
        assert_eq!(result.pixel(0, 0), [10, 20, 30, 255]);
        assert_eq!(result.pixel(1, 1), [0, 0, 0, 0]);
        assert_eq!(result.pixel(2, 2), [40, 50, 60, 128]);
    }

    #[test]
    fn test_trim_centered_block() {
        let mut img = transparent(10, 10);
        for y in 3..=6 {
            for x in 3..=6 {
                set_rgba8(&mut img, x, y, [255, 0, 0, 255]);
            }
        }

        let (_, result) = trim_image(&img).unwrap();

        assert_eq!(result.width, 4);
        assert_eq!(result.height, 4);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(result.pixel(x, y)[3], 255, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_trim_single_pixel() {
        let mut img = transparent(9, 9);
        set_rgba8(&mut img, 8, 0, [200, 100, 50, 3]);

        let (rect, result) = trim_image(&img).unwrap();

        assert_eq!(rect, BoundingRect::point(8, 0));
        assert_eq!(result.width, 1);
        assert_eq!(result.height, 1);
        assert_eq!(result.pixel(0, 0), [200, 100, 50, 3]);
    }

    #[test]
    fn test_trim_transparent_fails() {
        let img = transparent(3, 3);
        assert_eq!(trim_image(&img), Err(CropError::NoVisiblePixels));
    }

    #[test]
    fn test_retrim_is_identity() {
        let mut img = transparent(12, 12);
        set_rgba8(&mut img, 2, 4, [1, 1, 1, 255]);
        set_rgba8(&mut img, 9, 10, [2, 2, 2, 255]);

        let (_, first) = trim_image(&img).unwrap();
        let again = DecodedImage::from_rgba8(first.to_rgba_image().unwrap());
        let (rect, second) = trim_image(&again).unwrap();

        assert_eq!(Some(rect), BoundingRect::full(first.width, first.height));
        assert_eq!(second, first);
    }

    #[test]
    fn test_to_rgba_image() {
        let img = test_image(4, 3);
        let result = crop_to_rect(&img, BoundingRect::full(4, 3).unwrap());

        let rgba = result.to_rgba_image().unwrap();
        assert_eq!(rgba.dimensions(), (4, 3));
        assert_eq!(rgba.get_pixel(1, 2).0, result.pixel(1, 2));
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn test_out_of_bounds_rect_panics() {
        let img = test_image(4, 4);
        crop_to_rect(
            &img,
            BoundingRect {
                left: 0,
                top: 0,
                right: 4,
                bottom: 3,
            },
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
