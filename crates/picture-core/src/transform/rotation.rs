//! Lossless rotation by multiples of 90 degrees.
//!
//! # Algorithm
//!
//! A single clockwise quarter turn maps a source pixel of a `W x H`
//! picture to a destination of size `H x W`:
//! ```text
//! dst_x = H - 1 - src_y
//! dst_y = src_x
//! ```
//! Larger angles repeat the quarter turn. Four turns restore the original,
//! so only `(degrees / 90) % 4` turns are performed.

use crate::error::PictureError;
use crate::PixelBuffer;

/// Angle covered by one quarter turn.
pub const QUARTER_TURN_DEGREES: u32 = 90;

impl PixelBuffer {
    /// Rotate the picture clockwise by `degrees`.
    ///
    /// # Errors
    ///
    /// Returns `PictureError::InvalidArgument` if `degrees` is not a
    /// multiple of 90.
    pub fn rotate(&self, degrees: u32) -> Result<PixelBuffer, PictureError> {
        if degrees % QUARTER_TURN_DEGREES != 0 {
            return Err(PictureError::InvalidArgument(format!(
                "rotation angle must be a multiple of {QUARTER_TURN_DEGREES}, got {degrees}"
            )));
        }

        let turns = (degrees / QUARTER_TURN_DEGREES) % 4;
        let mut rotated = self.clone();
        for _ in 0..turns {
            rotated = rotated.quarter_turn();
        }
        Ok(rotated)
    }

    fn quarter_turn(&self) -> PixelBuffer {
        let (width, height) = self.dimensions();
        let mut output = PixelBuffer::new(height, width);
        for y in 0..height {
            for x in 0..width {
                output.put(height - 1 - y, x, self.color_at(x, y));
            }
        }
        output
    }
}


#[cfg(test)]
mod proptests {
    use crate::transform::strategies::buffer_strategy;
    use proptest::prelude::*;

    proptest! {
        /// Property: Four quarter turns are the identity.
        #[test]
        fn prop_four_quarter_turns_identity(buffer in buffer_strategy(8)) {
            let mut rotated = buffer.clone();
            for _ in 0..4 {
                rotated = rotated.rotate(90).unwrap();
            }
            prop_assert_eq!(rotated, buffer);
        }

        /// Property: Rotation by a full turn is the identity.
        #[test]
        fn prop_full_turn_identity(buffer in buffer_strategy(8), turns in 0u32..4) {
            prop_assert_eq!(buffer.rotate(360 * turns).unwrap(), buffer);
        }

        /// Property: Odd quarter turns swap dimensions.
        #[test]
        fn prop_quarter_turn_swaps_dimensions(buffer in buffer_strategy(8)) {
            let (w, h) = buffer.dimensions();
            prop_assert_eq!(buffer.rotate(90).unwrap().dimensions(), (h, w));
            prop_assert_eq!(buffer.rotate(270).unwrap().dimensions(), (h, w));
        }
    }
}
