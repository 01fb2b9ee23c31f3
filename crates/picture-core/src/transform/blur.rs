//! 3x3 box blur.
//!
//! A pixel is blurred only when its whole 3x3 neighbourhood lies inside the
//! picture. Border pixels are copied through unchanged; there is no
//! partial-neighbourhood averaging.

use crate::{Color, PixelBuffer};

/// Number of pixels in a 3x3 neighbourhood.
const NEIGHBOURHOOD_PIXELS: u32 = 9;

impl PixelBuffer {
    /// Return a box-blurred copy of the picture.
    pub fn blur(&self) -> PixelBuffer {
        PixelBuffer::from_fn(self.width(), self.height(), |x, y| {
            if self.has_neighbourhood(x, y) {
                self.neighbourhood_average(x, y)
            } else {
                self.color_at(x, y)
            }
        })
    }

    /// True when all four edge-adjacent neighbours of `(x, y)` are in bounds.
    fn has_neighbourhood(&self, x: u32, y: u32) -> bool {
        let (x, y) = (x as i64, y as i64);
        self.contains(x - 1, y)
            && self.contains(x + 1, y)
            && self.contains(x, y - 1)
            && self.contains(x, y + 1)
    }

    fn neighbourhood_average(&self, x: u32, y: u32) -> Color {
        let mut totals = [0u32; 3];
        for ny in y - 1..=y + 1 {
            for nx in x - 1..=x + 1 {
                let channels = self.color_at(nx, ny).channels();
                for (total, channel) in totals.iter_mut().zip(channels) {
                    *total += channel as u32;
                }
            }
        }
        Color::new(
            (totals[0] / NEIGHBOURHOOD_PIXELS) as u8,
            (totals[1] / NEIGHBOURHOOD_PIXELS) as u8,
            (totals[2] / NEIGHBOURHOOD_PIXELS) as u8,
        )
    }
}


#[cfg(test)]
mod proptests {
    use crate::transform::strategies::buffer_strategy;
    use crate::{Color, PixelBuffer};
    use proptest::prelude::*;

    proptest! {
        /// Property: Blur keeps dimensions and leaves the border untouched.
        #[test]
        fn prop_blur_preserves_border(buffer in buffer_strategy(8)) {
            let blurred = buffer.blur();
            prop_assert_eq!(blurred.dimensions(), buffer.dimensions());
            let (w, h) = buffer.dimensions();
            for y in 0..h {
                for x in 0..w {
                    if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
                        prop_assert_eq!(blurred.pixel(x, y).unwrap(), buffer.pixel(x, y).unwrap());
                    }
                }
            }
        }

        /// Property: A solid picture is a fixed point of blur.
        #[test]
        fn prop_blur_solid_fixed_point(w in 0u32..8, h in 0u32..8, v in any::<u8>()) {
            let solid = PixelBuffer::from_fn(w, h, |_, _| Color::gray(v));
            prop_assert_eq!(solid.blur(), solid);
        }
    }
}
