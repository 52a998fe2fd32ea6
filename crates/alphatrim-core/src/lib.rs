//! alphatrim core - transparent border trimming
//!
//! This crate removes fully transparent padding from raster images: it finds
//! the tightest rectangle around every pixel with non-zero alpha and writes
//! that rectangle out as a new PNG.
//!
//! # Module Structure
//!
//! - `decode` - Format sniffing and decoding into 16-bit RGBA
//! - `transform` - Visible bounds scan and cropped copy
//! - `encode` - RGBA8 PNG output
//! - `trim` - The file-to-file pipeline used by the command line tool

pub mod decode;
pub mod encode;
pub mod transform;
pub mod trim;

pub use decode::{decode_bytes, decode_image, DecodeError, DecodedImage};
pub use encode::{encode_png, write_png, EncodeError};
pub use transform::{
    crop_to_rect, find_visible_bounds, trim_image, BoundingRect, CropError, TrimmedImage,
};
pub use trim::{trim_file, TrimError, TrimReport};
