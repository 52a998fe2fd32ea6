//! Transparent border trimming.
//!
//! Trimming runs in two steps:
//! 1. [`find_visible_bounds`] scans every pixel and returns the tightest
//!    inclusive rectangle around pixels with non-zero alpha
//! 2. [`crop_to_rect`] copies that rectangle into a new 8-bit RGBA image
//!
//! # Coordinate System
//!
//! - Coordinates are integer pixel positions in the source image
//! - Rectangle bounds are inclusive on all four sides
//! - Origin is top-left corner

mod bounds;
mod crop;

pub use bounds::{find_visible_bounds, BoundingRect, CropError};
pub use crop::{crop_to_rect, trim_image, TrimmedImage};
