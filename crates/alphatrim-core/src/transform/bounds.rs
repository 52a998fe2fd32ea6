//! Bounding box detection for visible pixels.
//!
//! A pixel is visible when its alpha, reduced to 8-bit precision, is non-zero.
//! There is no tolerance: an alpha of `0x00FF` at 16 bits reduces to zero and
//! is treated as transparent.

use serde::Serialize;
use thiserror::Error;

use crate::decode::DecodedImage;

/// Errors that can occur while locating the content to crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CropError {
    /// Every pixel's alpha reduces to zero.
    #[error("no visible pixels: every pixel is fully transparent")]
    NoVisiblePixels,
}

/// Rectangle in source pixel coordinates, inclusive on all sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundingRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingRect {
    /// Rectangle covering exactly one pixel.
    pub fn point(x: u32, y: u32) -> Self {
        Self {
            left: x,
            top: y,
            right: x,
            bottom: y,
        }
    }

    /// Rectangle covering a whole `width` x `height` image.
    ///
    /// Returns `None` for a zero-sized image.
    pub fn full(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            left: 0,
            top: 0,
            right: width - 1,
            bottom: height - 1,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.right - self.left + 1
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.bottom - self.top + 1
    }

    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Check the rect is well-formed and lies inside a `width` x `height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left <= self.right
            && self.top <= self.bottom
            && self.right < width
            && self.bottom < height
    }

    /// Grow the rect just enough to include `(x, y)`.
    #[inline]
    fn include(self, x: u32, y: u32) -> Self {
        Self {
            left: self.left.min(x),
            top: self.top.min(y),
            right: self.right.max(x),
            bottom: self.bottom.max(y),
        }
    }
}

/// Find the tightest rectangle containing every pixel with non-zero alpha.
///
/// Pixels are visited in row-major order and folded into the running
/// rectangle. The reduction is a min/max accumulation, so the result does not
/// depend on visiting order.
///
/// # Errors
///
/// Returns `CropError::NoVisiblePixels` if every alpha sample reduces to zero,
/// including when the image has no pixels at all.
pub fn find_visible_bounds(image: &DecodedImage) -> Result<BoundingRect, CropError> {
    let (width, height) = (image.width, image.height);

    let bounds = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .filter(|&(x, y)| image.alpha8_at(x, y) != 0)
        .fold(None, |acc: Option<BoundingRect>, (x, y)| {
            Some(match acc {
                Some(rect) => rect.include(x, y),
                None => BoundingRect::point(x, y),
            })
        });

    bounds.ok_or(CropError::NoVisiblePixels)
}



// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::test_support::{set_rgba8, transparent};
    use super::*;
    use proptest::prelude::*;

    /// Strategy for an image size plus a set of visible pixel positions.
    fn visible_pixels_strategy() -> impl Strategy<Value = (u32, u32, Vec<(u32, u32, u8)>)> {
        (1u32..=24, 1u32..=24).prop_flat_map(|(w, h)| {
            (
                Just(w),
                Just(h),
                prop::collection::vec((0..w, 0..h, 1u8..=255), 1..12),
            )
        })
    }

    fn build(w: u32, h: u32, visible: &[(u32, u32, u8)]) -> DecodedImage {
        let mut img = transparent(w, h);
        for &(x, y, a) in visible {
            set_rgba8(&mut img, x, y, [x as u8, y as u8, 7, a]);
        }
        img
    }

    proptest! {
        /// Property: every visible pixel lies inside the rect.
        #[test]
        fn prop_rect_contains_all_visible(
            (w, h, visible) in visible_pixels_strategy(),
        ) {
            let img = build(w, h, &visible);
            let rect = find_visible_bounds(&img).unwrap();

            prop_assert!(rect.fits_within(w, h));
            for &(x, y, _) in &visible {
                prop_assert!(rect.contains(x, y), "({}, {}) outside {:?}", x, y, rect);
            }
        }

        /// Property: each of the four border lines holds a visible pixel.
        #[test]
        fn prop_rect_is_tight(
            (w, h, visible) in visible_pixels_strategy(),
        ) {
            let img = build(w, h, &visible);
            let rect = find_visible_bounds(&img).unwrap();

            let column_visible =
                |x: u32| (rect.top..=rect.bottom).any(|y| img.alpha8_at(x, y) != 0);
            let row_visible =
                |y: u32| (rect.left..=rect.right).any(|x| img.alpha8_at(x, y) != 0);

            prop_assert!(column_visible(rect.left));
            prop_assert!(column_visible(rect.right));
            prop_assert!(row_visible(rect.top));
            prop_assert!(row_visible(rect.bottom));
        }

        /// Property: a single visible pixel gives a 1x1 rect at its position.
        #[test]
        fn prop_single_pixel_rect(
            (w, h) in (1u32..=32, 1u32..=32),
            seed in any::<(u32, u32)>(),
            alpha in 1u8..=255,
        ) {
            let (x, y) = (seed.0 % w, seed.1 % h);
            let img = build(w, h, &[(x, y, alpha)]);

            prop_assert_eq!(find_visible_bounds(&img), Ok(BoundingRect::point(x, y)));
        }
    }
}
