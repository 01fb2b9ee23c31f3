//! Raster image decoding using the `image` crate.

use std::io::Cursor;
use std::path::Path;

use image::{ImageError, ImageReader};
use log::debug;

use super::DecodeError;
use crate::PixelBuffer;

/// Decode an image from its encoded bytes.
///
/// The format is guessed from the contents, so the bytes may come from any
/// supported file type.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedFormat` if the format is not recognized.
/// Returns `DecodeError::Corrupted` if the data cannot be decoded.
pub fn decode_bytes(bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::Corrupted(e.to_string()))?;

    let format = reader.format().ok_or(DecodeError::UnsupportedFormat)?;

    let img = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(_) => DecodeError::UnsupportedFormat,
        other => DecodeError::Corrupted(other.to_string()),
    })?;

    let picture = PixelBuffer::from_rgb_image(img.into_rgb8());
    debug!(
        "decoded {:?} image: {}x{}",
        format,
        picture.width(),
        picture.height()
    );
    Ok(picture)
}

/// Read and decode the image file at `path`.
///
/// # Errors
///
/// Returns `DecodeError::Io` with the path if the file cannot be read, or
/// any error of [`decode_bytes`].
pub fn open(path: impl AsRef<Path>) -> Result<PixelBuffer, DecodeError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| DecodeError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    decode_bytes(&bytes)
}
