//! Per-pixel colour adjustments: invert and grayscale.
//!
//! Both adjustments map every pixel independently and keep the picture's
//! dimensions. Arithmetic is integer only.

use crate::{Color, PixelBuffer};

impl PixelBuffer {
    /// Return the photographic negative of this picture.
    ///
    /// Formula: `output = 255 - input`, per channel.
    pub fn invert(&self) -> PixelBuffer {
        PixelBuffer::from_fn(self.width(), self.height(), |x, y| {
            self.color_at(x, y).inverted()
        })
    }

    /// Return a gray version of this picture.
    ///
    /// Every channel is replaced by `(r + g + b) / 3`, truncated.
    pub fn grayscale(&self) -> PixelBuffer {
        PixelBuffer::from_fn(self.width(), self.height(), |x, y| {
            Color::gray(self.color_at(x, y).average())
        })
    }
}
