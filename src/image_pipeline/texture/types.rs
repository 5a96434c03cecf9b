//! Decoded texture type

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::encoding::TextureFormat;

/// A decoded image laid out in one of the canonical [`TextureFormat`]s.
///
/// Rows are stored contiguously with no padding, so the byte stride of a
/// row is always `width * format.bytes_per_pixel()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture2D {
    width: usize,
    height: usize,
    format: TextureFormat,
    data: Vec<u8>,
}

impl Texture2D {
    /// Wraps a buffer that is already laid out for `format`; no resampling.
    pub fn from_raw(
        width: usize,
        height: usize,
        format: TextureFormat,
        data: Vec<u8>,
    ) -> Result<Self> {
        let expected = width * height * format.bytes_per_pixel();
        if data.len() != expected {
            return Err(ConversionError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    /// A texture with every pixel set to `fill`.
    pub fn filled(width: usize, height: usize, format: TextureFormat, fill: &[u8]) -> Result<Self> {
        if fill.len() != format.bytes_per_pixel() {
            return Err(ConversionError::BufferSizeMismatch {
                expected: format.bytes_per_pixel(),
                actual: fill.len(),
            });
        }
        let data = fill.repeat(width * height);
        Self::from_raw(width, height, format, data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn format(&self) -> TextureFormat {
        self.format
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn row_bytes(&self) -> usize {
        self.width * self.format.bytes_per_pixel()
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        y * self.row_bytes() + x * self.format.bytes_per_pixel()
    }

    /// Bytes of the pixel at `(x, y)`, `None` outside the texture.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = self.offset(x, y);
        Some(&self.data[start..start + self.format.bytes_per_pixel()])
    }

    /// Bytes of the pixel nearest to `(x, y)`, clamping to the texture edge.
    ///
    /// Returns `None` only for an empty texture.
    pub fn pixel_clamped(&self, x: i64, y: i64) -> Option<&[u8]> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let x = x.clamp(0, self.width as i64 - 1) as usize;
        let y = y.clamp(0, self.height as i64 - 1) as usize;
        self.pixel(x, y)
    }

    pub(crate) fn set_pixel(&mut self, x: usize, y: usize, value: &[u8]) {
        let start = self.offset(x, y);
        let end = start + self.format.bytes_per_pixel();
        self.data[start..end].copy_from_slice(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_checks_stride() {
        let texture = Texture2D::from_raw(2, 2, TextureFormat::RGB24, vec![0; 12]).unwrap();
        assert_eq!(texture.row_bytes(), 6);

        let err = Texture2D::from_raw(2, 2, TextureFormat::R16, vec![0; 4]).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::BufferSizeMismatch { expected: 8, actual: 4 }
        ));
    }

    #[test]
    fn test_pixel_access() {
        let data: Vec<u8> = (0..12).collect();
        let texture = Texture2D::from_raw(2, 2, TextureFormat::RGB24, data).unwrap();
        assert_eq!(texture.pixel(1, 0), Some(&[3u8, 4, 5][..]));
        assert_eq!(texture.pixel(0, 1), Some(&[6u8, 7, 8][..]));
        assert_eq!(texture.pixel(2, 0), None);
        assert_eq!(texture.into_data(), (0..12).collect::<Vec<u8>>());
    }

    #[test]
    fn test_pixel_clamped() {
        let texture = Texture2D::from_raw(2, 2, TextureFormat::R8, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(texture.pixel_clamped(-5, -1), Some(&[1u8][..]));
        assert_eq!(texture.pixel_clamped(9, 0), Some(&[2u8][..]));
        assert_eq!(texture.pixel_clamped(9, 9), Some(&[4u8][..]));

        let empty = Texture2D::from_raw(0, 0, TextureFormat::R8, Vec::new()).unwrap();
        assert_eq!(empty.pixel_clamped(0, 0), None);
    }

    #[test]
    fn test_filled() {
        let texture = Texture2D::filled(3, 1, TextureFormat::RG16, &[7, 9]).unwrap();
        assert_eq!(texture.data(), &[7, 9, 7, 9, 7, 9]);
        assert!(Texture2D::filled(3, 1, TextureFormat::RG16, &[7]).is_err());
    }
}
