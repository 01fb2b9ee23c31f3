//! Image decoding for picture-tools.
//!
//! This module turns encoded image files into a [`PixelBuffer`]:
//! - Format detection from the file contents (PNG, JPEG)
//! - Conversion of any colour layout to 8-bit RGB (alpha is dropped)
//!
//! # Examples
//!
//! ```ignore
//! use picture_core::decode;
//!
//! let picture = decode::open("photo.png")?;
//! println!("Decoded {}x{} picture", picture.width(), picture.height());
//! ```
//!
//! [`PixelBuffer`]: crate::PixelBuffer

mod raster;
mod types;

pub use raster::{decode_bytes, open};
pub use types::DecodeError;
