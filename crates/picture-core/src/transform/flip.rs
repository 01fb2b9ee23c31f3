//! Mirror a picture about its vertical or horizontal axis.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PictureError;
use crate::PixelBuffer;

/// Axis a picture is mirrored across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlipDirection {
    /// Mirror left to right: `(x, y) -> (W - 1 - x, y)`.
    Horizontal,
    /// Mirror top to bottom: `(x, y) -> (x, H - 1 - y)`.
    Vertical,
}

impl FromStr for FlipDirection {
    type Err = PictureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" | "h" | "horizontal" => Ok(FlipDirection::Horizontal),
            "V" | "v" | "vertical" => Ok(FlipDirection::Vertical),
            other => Err(PictureError::InvalidArgument(format!(
                "unknown flip direction '{other}', expected H or V"
            ))),
        }
    }
}

impl fmt::Display for FlipDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlipDirection::Horizontal => f.write_str("H"),
            FlipDirection::Vertical => f.write_str("V"),
        }
    }
}

impl PixelBuffer {
    /// Return a mirrored copy of the picture.
    pub fn flip(&self, direction: FlipDirection) -> PixelBuffer {
        let (width, height) = self.dimensions();
        let mut output = PixelBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let (dst_x, dst_y) = match direction {
                    FlipDirection::Horizontal => (width - 1 - x, y),
                    FlipDirection::Vertical => (x, height - 1 - y),
                };
                output.put(dst_x, dst_y, self.color_at(x, y));
            }
        }
        output
    }
}
