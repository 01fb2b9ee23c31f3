//! RGB colour value.

use serde::{Deserialize, Serialize};

use crate::MAX_INTENSITY;

/// An immutable RGB colour with 8-bit channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a colour from its red, green and blue channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a gray colour with all three channels set to `value`.
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    pub fn red(self) -> u8 {
        self.red
    }

    pub fn green(self) -> u8 {
        self.green
    }

    pub fn blue(self) -> u8 {
        self.blue
    }

    /// Channel values as `[r, g, b]`.
    pub fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Complement of every channel against the maximum intensity.
    #[inline]
    pub fn inverted(self) -> Self {
        Self::new(
            MAX_INTENSITY - self.red,
            MAX_INTENSITY - self.green,
            MAX_INTENSITY - self.blue,
        )
    }

    /// Truncated mean of the three channels.
    #[inline]
    pub fn average(self) -> u8 {
        ((self.red as u16 + self.green as u16 + self.blue as u16) / 3) as u8
    }

    /// Opaque `0xFFRRGGBB` packing of this colour.
    pub fn packed_argb(self) -> u32 {
        0xFF00_0000 | ((self.red as u32) << 16) | ((self.green as u32) << 8) | self.blue as u32
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.channels()
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(rgb: image::Rgb<u8>) -> Self {
        Self::from(rgb.0)
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb(color.channels())
    }
}
