//! Compressed image format types

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Container formats a texture can be compressed into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressedFormat {
    /// Lossless PNG
    Png,
    /// Baseline JPEG with the given quality (1-100)
    Jpeg(u8),
}

impl CompressedFormat {
    /// Default JPEG quality when parsed from a bare format name.
    pub const DEFAULT_JPEG_QUALITY: u8 = 90;

    /// Parses the `format` field of a compressed image message.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "png" => Ok(CompressedFormat::Png),
            "jpeg" | "jpg" => Ok(CompressedFormat::Jpeg(Self::DEFAULT_JPEG_QUALITY)),
            _ => Err(ConversionError::UnsupportedFormat(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CompressedFormat::Png => "png",
            CompressedFormat::Jpeg(_) => "jpeg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(CompressedFormat::from_name("PNG").unwrap(), CompressedFormat::Png);
        assert_eq!(
            CompressedFormat::from_name("jpg").unwrap(),
            CompressedFormat::Jpeg(90)
        );
        assert!(CompressedFormat::from_name("tiff").is_err());
        assert_eq!(CompressedFormat::Jpeg(50).name(), "jpeg");
    }
}
