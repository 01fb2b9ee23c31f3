//! Picture Core - pixel buffer and image transformations
//!
//! This crate provides the in-memory RGB pixel buffer used by picture-tools,
//! the transformations that operate on it (invert, grayscale, rotate, flip,
//! blend, blur), and a thin codec layer for reading and writing image files.

pub mod buffer;
pub mod color;
pub mod decode;
pub mod encode;
pub mod error;
pub mod transform;

pub use buffer::PixelBuffer;
pub use color::Color;
pub use decode::DecodeError;
pub use encode::{EncodeError, OutputFormat};
pub use error::PictureError;
pub use transform::{blend_all, FlipDirection, Transform};

/// Maximum value of a single colour channel.
pub const MAX_INTENSITY: u8 = 255;

/// Number of bytes used to store one RGB pixel.
pub const BYTES_PER_PIXEL: usize = 3;
