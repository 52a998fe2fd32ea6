//! Image encoding for alphatrim.
//!
//! Trimmed output is always written as RGBA8 PNG.
//!
//! # Examples
//!
//! ```ignore
//! use alphatrim_core::encode::encode_png;
//!
//! let pixels = vec![0u8; 100 * 100 * 4]; // Transparent image
//! let png_bytes = encode_png(&pixels, 100, 100).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod png;

pub use png::{encode_png, write_png, write_png_pixels, EncodeError};
