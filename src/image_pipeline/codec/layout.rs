use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::encoding::channel_count;

/// Interleaved sample layout of a raw pixel buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelLayout {
    /// Channels per pixel
    pub channels: usize,
    /// Bytes per channel sample
    pub sample_bytes: usize,
}

impl PixelLayout {
    /// Layout of a byte-per-sample buffer with the given channel count.
    pub fn bytes(channels: usize) -> Self {
        Self {
            channels,
            sample_bytes: 1,
        }
    }

    /// Layout the byte codec assumes for a format tag (one byte per sample).
    pub fn from_tag(tag: &str) -> Self {
        Self::bytes(channel_count(tag))
    }

    /// Derives the sample width from the buffer length.
    ///
    /// The channel count comes from the format tag; whatever is left of the
    /// per-pixel byte count is the width of each sample, so `mono16` and
    /// `32FC1` buffers move whole samples when reordered.
    pub fn infer(tag: &str, width: usize, height: usize, len: usize) -> Result<Self> {
        let channels = channel_count(tag);
        let samples = width * height * channels;
        if samples == 0 || len == 0 || len % samples != 0 {
            return Err(ConversionError::BufferSizeMismatch {
                expected: samples,
                actual: len,
            });
        }
        Ok(Self {
            channels,
            sample_bytes: len / samples,
        })
    }

    pub fn pixel_bytes(&self) -> usize {
        self.channels * self.sample_bytes
    }

    pub fn buffer_len(&self, width: usize, height: usize) -> usize {
        width * height * self.pixel_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(PixelLayout::from_tag("bgra8"), PixelLayout::bytes(4));
        assert_eq!(PixelLayout::from_tag("mono8").pixel_bytes(), 1);
    }

    #[test]
    fn test_infer_sample_width() {
        let layout = PixelLayout::infer("mono16", 4, 2, 16).unwrap();
        assert_eq!(layout.channels, 1);
        assert_eq!(layout.sample_bytes, 2);

        let layout = PixelLayout::infer("32FC4", 2, 2, 64).unwrap();
        assert_eq!(layout.channels, 4);
        assert_eq!(layout.sample_bytes, 4);
        assert_eq!(layout.buffer_len(2, 2), 64);
    }

    #[test]
    fn test_infer_rejects_partial_pixels() {
        let err = PixelLayout::infer("rgb8", 2, 2, 13).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::BufferSizeMismatch { expected: 12, actual: 13 }
        ));
        assert!(PixelLayout::infer("rgb8", 2, 2, 0).is_err());
    }
}
