//! Picture transformations.
//!
//! Every transformation reads one or more source pictures and allocates a
//! fresh output; sources are never modified.
//!
//! - [`PixelBuffer::invert`] and [`PixelBuffer::grayscale`] adjust colours
//! - [`PixelBuffer::rotate`] turns clockwise by multiples of 90 degrees
//! - [`PixelBuffer::flip`] mirrors horizontally or vertically
//! - [`PixelBuffer::blend`] averages pictures over their shared area
//! - [`PixelBuffer::blur`] applies a 3x3 box blur
//!
//! [`Transform`] names one of these with its parameters so callers can
//! choose a transformation at runtime.
//!
//! # Coordinate System
//!
//! - Origin is top-left corner
//! - Rotation is clockwise

mod adjust;
mod blend;
mod blur;
mod flip;
mod rotation;

pub use blend::{blend_all, intersection_dimensions};
pub use flip::FlipDirection;
pub use rotation::QUARTER_TURN_DEGREES;

use crate::error::PictureError;
use crate::PixelBuffer;

/// A transformation together with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transform {
    Invert,
    Grayscale,
    /// Clockwise rotation; must be a multiple of 90 degrees.
    Rotate {
        degrees: u32,
    },
    Flip(FlipDirection),
    /// Average the source with these additional pictures.
    Blend(Vec<PixelBuffer>),
    Blur,
}

impl Transform {
    /// Rotation from signed degrees, as typed on a command line.
    ///
    /// # Errors
    ///
    /// Returns `PictureError::InvalidArgument` for negative angles or angles
    /// that are not a multiple of 90.
    pub fn rotate(degrees: i64) -> Result<Transform, PictureError> {
        let degrees = u32::try_from(degrees).map_err(|_| {
            PictureError::InvalidArgument(format!(
                "rotation angle must be non-negative, got {degrees}"
            ))
        })?;
        if degrees % QUARTER_TURN_DEGREES != 0 {
            return Err(PictureError::InvalidArgument(format!(
                "rotation angle must be a multiple of {QUARTER_TURN_DEGREES}, got {degrees}"
            )));
        }
        Ok(Transform::Rotate { degrees })
    }

    /// Apply this transformation to `source`.
    ///
    /// # Errors
    ///
    /// Returns `PictureError::InvalidArgument` for a rotation angle that is
    /// not a multiple of 90 degrees.
    pub fn apply(&self, source: &PixelBuffer) -> Result<PixelBuffer, PictureError> {
        match self {
            Transform::Invert => Ok(source.invert()),
            Transform::Grayscale => Ok(source.grayscale()),
            Transform::Rotate { degrees } => source.rotate(*degrees),
            Transform::Flip(direction) => Ok(source.flip(*direction)),
            Transform::Blend(others) => Ok(source.blend(others)),
            Transform::Blur => Ok(source.blur()),
        }
    }

    /// Short lowercase name, as used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Invert => "invert",
            Transform::Grayscale => "grayscale",
            Transform::Rotate { .. } => "rotate",
            Transform::Flip(_) => "flip",
            Transform::Blend(_) => "blend",
            Transform::Blur => "blur",
        }
    }
}
