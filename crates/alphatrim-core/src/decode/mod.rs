//! Image decoding for alphatrim.
//!
//! This module provides functionality for:
//! - Sniffing the input format from its magic bytes
//! - Decoding PNG and JPEG data into a 16-bit RGBA buffer
//! - Reducing samples to 8-bit precision for visibility tests and copying
//!
//! # Examples
//!
//! ```ignore
//! use alphatrim_core::decode::decode_bytes;
//!
//! let bytes = std::fs::read("sprite.png")?;
//! let image = decode_bytes(&bytes)?;
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod reader;
mod types;

pub use reader::{decode_bytes, decode_image};
pub use types::{channel_to_u8, DecodeError, DecodedImage};
