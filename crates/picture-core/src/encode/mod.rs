//! Image encoding for picture-tools.
//!
//! This module provides functionality for:
//! - Encoding pictures to PNG (lossless, the default output)
//! - Encoding pictures to JPEG with configurable quality
//! - Choosing the output format from a destination path
//!
//! # Examples
//!
//! ```ignore
//! use picture_core::encode::{save, OutputFormat};
//!
//! let format = OutputFormat::from_path("out.png", 90);
//! save(&picture, "out.png", format)?;
//! ```

mod jpeg;
mod png;

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::PixelBuffer;

pub use self::jpeg::encode_jpeg;
pub use self::png::encode_png;

/// Default JPEG quality when none is given.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Errors that can occur while encoding or writing a picture.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The encoder rejected the picture
    #[error("{format} encoding failed: {message}")]
    EncodingFailed {
        format: &'static str,
        message: String,
    },

    /// The destination could not be written
    #[error("Cannot write {path}: {message}")]
    Io { path: String, message: String },
}

/// File format written by [`encode`] and [`save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Lossless PNG.
    #[default]
    Png,
    /// JPEG with quality 1-100.
    Jpeg { quality: u8 },
}

impl OutputFormat {
    /// Pick a format from the destination's extension.
    ///
    /// `.jpg` and `.jpeg` (any case) select JPEG with `quality`; anything
    /// else selects PNG.
    pub fn from_path(path: impl AsRef<Path>, quality: u8) -> Self {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("jpg") | Some("jpeg") => OutputFormat::Jpeg { quality },
            _ => OutputFormat::Png,
        }
    }

    /// Human readable name of the format.
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Png => "PNG",
            OutputFormat::Jpeg { .. } => "JPEG",
        }
    }
}

/// Encode a picture into bytes of the requested format.
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for pictures without pixels,
/// or `EncodeError::EncodingFailed` if the encoder fails.
pub fn encode(picture: &PixelBuffer, format: OutputFormat) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = picture.dimensions();
    let bytes = match format {
        OutputFormat::Png => encode_png(picture.as_raw(), width, height)?,
        OutputFormat::Jpeg { quality } => encode_jpeg(picture.as_raw(), width, height, quality)?,
    };
    debug!(
        "encoded {}x{} picture as {}: {} bytes",
        width,
        height,
        format.name(),
        bytes.len()
    );
    Ok(bytes)
}

/// Encode a picture and write it to `path`.
///
/// # Errors
///
/// Returns any error of [`encode`], or `EncodeError::Io` with the path if
/// the file cannot be written.
pub fn save(
    picture: &PixelBuffer,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<(), EncodeError> {
    let path = path.as_ref();
    let bytes = encode(picture, format)?;
    std::fs::write(path, &bytes).map_err(|e| EncodeError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Shared validation for the format encoders.
fn validate(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }
    let expected = (width as usize) * (height as usize) * crate::BYTES_PER_PIXEL;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}
