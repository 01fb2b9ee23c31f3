//! In-memory RGB pixel buffer.
//!
//! A [`PixelBuffer`] owns a grid of RGB pixels stored row-major, three bytes
//! per pixel. It is the value every transformation reads and produces.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner
//! - `x` grows to the right, `y` grows downwards
//! - Byte offset of `(x, y)` is `(y * width + x) * 3`

use std::fmt;
use std::path::Path;

use crate::encode::OutputFormat;
use crate::error::PictureError;
use crate::{decode, encode, Color, BYTES_PER_PIXEL};

/// An RGB picture held in memory.
///
/// Equality and hashing are by content: two buffers are equal when they
/// have the same dimensions and the same bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a black buffer with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; byte_len(width, height)],
        }
    }

    /// Create a black buffer from signed dimensions.
    ///
    /// # Errors
    ///
    /// Returns `PictureError::InvalidDimension` if either dimension is
    /// negative or does not fit in a `u32`.
    pub fn try_new(width: i64, height: i64) -> Result<Self, PictureError> {
        match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) => Ok(Self::new(w, h)),
            _ => Err(PictureError::InvalidDimension { width, height }),
        }
    }

    /// Wrap existing row-major RGB bytes.
    ///
    /// # Errors
    ///
    /// Returns `PictureError::PixelDataMismatch` if `pixels.len()` is not
    /// `width * height * 3`.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, PictureError> {
        let expected = byte_len(width, height);
        if pixels.len() != expected {
            return Err(PictureError::PixelDataMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a buffer by evaluating `f` at every coordinate in raster order.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Color) -> Self {
        let mut pixels = Vec::with_capacity(byte_len(width, height));
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&f(x, y).channels());
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a PixelBuffer from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an image::RgbImage for encoding.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Decode a picture from the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PictureError> {
        Ok(decode::open(path)?)
    }

    /// Decode a picture from encoded file bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, PictureError> {
        Ok(decode::decode_bytes(bytes)?)
    }

    /// Encode this picture and write it to `path`.
    pub fn save(&self, path: impl AsRef<Path>, format: OutputFormat) -> Result<(), PictureError> {
        Ok(encode::save(self, path, format)?)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` of the picture.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if this picture has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Borrow the raw row-major RGB bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the buffer, returning its raw RGB bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// Test if the point `(x, y)` lies within the picture.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    /// Return the colour of the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns `PictureError::OutOfBounds` if the point is outside the picture.
    pub fn pixel(&self, x: u32, y: u32) -> Result<Color, PictureError> {
        self.check_bounds(x, y)?;
        Ok(self.color_at(x, y))
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns `PictureError::OutOfBounds` if the point is outside the picture.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<(), PictureError> {
        self.check_bounds(x, y)?;
        self.put(x, y, color);
        Ok(())
    }

    /// Iterate over every pixel in raster order.
    pub fn pixels(&self) -> impl Iterator<Item = Color> + '_ {
        self.pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|rgb| Color::new(rgb[0], rgb[1], rgb[2]))
    }

    /// Polynomial hash of the pixel data in raster order.
    ///
    /// Each pixel contributes its opaque `0xFFRRGGBB` packing as
    /// `h = 31 * h + packed` with wrapping 32-bit arithmetic, so equal
    /// pictures always produce equal values.
    pub fn content_hash(&self) -> i32 {
        self.pixels().fold(0i32, |hash, color| {
            hash.wrapping_mul(31)
                .wrapping_add(color.packed_argb() as i32)
        })
    }

    fn check_bounds(&self, x: u32, y: u32) -> Result<(), PictureError> {
        if x < self.width && y < self.height {
            Ok(())
        } else {
            Err(PictureError::OutOfBounds {
                x: x as i64,
                y: y as i64,
                width: self.width,
                height: self.height,
            })
        }
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }

    /// Read a pixel the caller already knows to be in bounds.
    #[inline]
    pub(crate) fn color_at(&self, x: u32, y: u32) -> Color {
        let idx = self.offset(x, y);
        Color::new(self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2])
    }

    /// Write a pixel the caller already knows to be in bounds.
    #[inline]
    pub(crate) fn put(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.offset(x, y);
        self.pixels[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&color.channels());
    }
}

impl fmt::Display for PixelBuffer {
    /// One line per image row, top row first, pixels written as `(r,g,b)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let color = self.color_at(x, y);
                write!(f, "({},{},{})", color.red(), color.green(), color.blue())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[inline]
fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}
