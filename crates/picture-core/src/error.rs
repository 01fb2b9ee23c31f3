//! Error type shared by the pixel buffer and the transformations.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Errors raised by pixel buffer operations.
#[derive(Debug, Error)]
pub enum PictureError {
    /// A requested width or height is negative or too large.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimension { width: i64, height: i64 },

    /// Raw pixel data does not match the declared dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    PixelDataMismatch { expected: usize, actual: usize },

    /// A pixel coordinate lies outside the buffer.
    #[error("Pixel ({x}, {y}) is outside a {width}x{height} picture")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    /// A transform parameter was not recognised.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Blend was given no pictures at all.
    #[error("Cannot blend an empty list of pictures")]
    EmptyInput,

    /// The source image could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The result could not be encoded or written.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
