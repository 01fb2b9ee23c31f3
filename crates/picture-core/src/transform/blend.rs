//! Average several pictures into one.
//!
//! The output covers only the area every input shares: its width is the
//! smallest input width and its height the smallest input height. Pixels
//! outside that intersection are dropped.

use crate::error::PictureError;
use crate::{Color, PixelBuffer};

impl PixelBuffer {
    /// Blend this picture with `others`.
    ///
    /// The receiver always takes part in the average, so the divisor is
    /// `others.len() + 1`. Channels are averaged with integer truncation.
    pub fn blend(&self, others: &[PixelBuffer]) -> PixelBuffer {
        let inputs: Vec<&PixelBuffer> = std::iter::once(self).chain(others).collect();
        blend_refs(&inputs)
    }
}

/// Blend an ordered list of pictures; the first acts as the receiver.
///
/// # Errors
///
/// Returns `PictureError::EmptyInput` if `pictures` is empty.
pub fn blend_all(pictures: &[PixelBuffer]) -> Result<PixelBuffer, PictureError> {
    match pictures.split_first() {
        Some((first, rest)) => Ok(first.blend(rest)),
        None => Err(PictureError::EmptyInput),
    }
}

/// Dimensions of the region shared by every picture.
pub fn intersection_dimensions<'a>(
    pictures: impl IntoIterator<Item = &'a PixelBuffer>,
) -> Option<(u32, u32)> {
    pictures
        .into_iter()
        .map(PixelBuffer::dimensions)
        .reduce(|(w, h), (pw, ph)| (w.min(pw), h.min(ph)))
}

fn blend_refs(inputs: &[&PixelBuffer]) -> PixelBuffer {
    let (width, height) = intersection_dimensions(inputs.iter().copied()).unwrap_or((0, 0));
    let count = inputs.len().max(1) as u64;

    PixelBuffer::from_fn(width, height, |x, y| {
        let mut totals = [0u64; 3];
        for picture in inputs {
            let channels = picture.color_at(x, y).channels();
            for (total, channel) in totals.iter_mut().zip(channels) {
                *total += channel as u64;
            }
        }
        Color::new(
            (totals[0] / count) as u8,
            (totals[1] / count) as u8,
            (totals[2] / count) as u8,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, color: Color) -> PixelBuffer {
        PixelBuffer::from_fn(width, height, |_, _| color)
    }

    #[test]
    fn test_blend_single_is_identity() {
        let img = PixelBuffer::from_fn(3, 2, |x, y| Color::new(x as u8, y as u8, 9));
        assert_eq!(img.blend(&[]), img);
        assert_eq!(blend_all(std::slice::from_ref(&img)).unwrap(), img);
    }

    #[test]
    fn test_blend_empty_input() {
        assert!(matches!(blend_all(&[]), Err(PictureError::EmptyInput)));
    }

    #[test]
    fn test_blend_output_dimensions() {
        let a = solid(4, 4, Color::BLACK);
        let b = solid(3, 5, Color::WHITE);
        assert_eq!(a.blend(&[b]).dimensions(), (3, 4));
    }

    #[test]
    fn test_blend_averages_with_truncation() {
        let a = solid(2, 2, Color::new(255, 0, 10));
        let b = solid(2, 2, Color::new(0, 0, 11));
        let blended = a.blend(&[b]);
        // 255 / 2 = 127, 21 / 2 = 10
        assert!(blended.pixels().all(|c| c == Color::new(127, 0, 10)));
    }

    #[test]
    fn test_blend_includes_receiver() {
        let a = solid(1, 1, Color::gray(90));
        let b = solid(1, 1, Color::gray(0));
        let c = solid(1, 1, Color::gray(0));
        // (90 + 0 + 0) / 3
        assert_eq!(a.blend(&[b, c]).pixel(0, 0).unwrap(), Color::gray(30));
    }

    #[test]
    fn test_blend_all_matches_receiver_blend() {
        let pictures = vec![
            solid(3, 3, Color::new(10, 20, 30)),
            solid(2, 4, Color::new(40, 50, 60)),
            solid(5, 1, Color::new(70, 80, 91)),
        ];
        let blended = blend_all(&pictures).unwrap();
        assert_eq!(blended, pictures[0].blend(&pictures[1..]));
        assert_eq!(blended.dimensions(), (2, 1));
        assert_eq!(blended.pixel(1, 0).unwrap(), Color::new(40, 50, 60));
    }

    #[test]
    fn test_blend_with_empty_picture() {
        let a = solid(3, 3, Color::WHITE);
        let empty = PixelBuffer::new(0, 3);
        assert!(a.blend(&[empty]).is_empty());
    }

    #[test]
    fn test_intersection_dimensions() {
        let pictures = [solid(4, 4, Color::BLACK), solid(3, 5, Color::BLACK)];
        assert_eq!(intersection_dimensions(&pictures), Some((3, 4)));
        assert_eq!(intersection_dimensions(std::iter::empty()), None);
    }
}
