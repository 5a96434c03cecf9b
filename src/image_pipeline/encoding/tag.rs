//! Format tag lookups.
//!
//! ROS `sensor_msgs/Image` carries its pixel encoding as a free-form string
//! (`"bgr8"`, `"mono16"`, `"32FC1"`, ...). Two independent lookups resolve it:
//! a substring heuristic for the number of interleaved channels used by the
//! byte codec, and an exact table for the texture format the bytes load into.

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::encoding::types::TextureFormat;

/// Number of interleaved channels implied by a format tag.
///
/// Tags ending in `1` or naming a mono/bayer encoding are single channel, tags
/// ending in `4` or containing an `a` (alpha) have four, everything else three.
pub fn channel_count(tag: &str) -> usize {
    if tag.ends_with('1') || tag.contains("mono") || tag.contains("bayer") {
        1
    } else if tag.ends_with('4') || tag.contains('a') {
        4
    } else {
        3
    }
}

/// Resolves the texture format a raw buffer with this tag is loaded into.
///
/// Unrecognized tags fall back to [`TextureFormat::RGB24`]. The signed 32-bit
/// integer encodings and `32FC3` are recognized but have no texture
/// counterpart and are reported as unsupported.
pub fn texture_format(tag: &str) -> Result<TextureFormat> {
    let format = match tag {
        "8UC1" | "8SC1" | "mono8" => TextureFormat::R8,
        "8UC2" | "8SC2" => TextureFormat::RG16,
        "8UC3" | "8SC3" | "bgr8" | "rgb8" => TextureFormat::RGB24,
        "8UC4" | "8SC4" | "bgra8" | "rgba8" => TextureFormat::RGBA32,
        "16UC1" | "16SC1" | "mono16" => TextureFormat::R16,
        "16UC2" | "16SC2" => TextureFormat::RG32,
        "16UC3" | "16SC3" => TextureFormat::RGB48,
        "16UC4" | "16SC4" => TextureFormat::RGBA64,
        "32SC1" | "32SC2" | "32SC3" | "32SC4" | "32FC3" => {
            return Err(ConversionError::UnsupportedFormat(tag.to_string()));
        }
        "32FC1" => TextureFormat::RFloat,
        "32FC2" => TextureFormat::RGFloat,
        "32FC4" => TextureFormat::RGBAFloat,
        // 64-bit float images have no texture equivalent and load as RGB24
        "64FC1" | "64FC2" | "64FC3" | "64FC4" => TextureFormat::RGB24,
        "bayer_rggb8" | "bayer_bggr8" | "bayer_gbrg8" | "bayer_grbg8" => TextureFormat::R8,
        "bayer_rggb16" | "bayer_bggr16" | "bayer_gbrg16" | "bayer_grbg16" => TextureFormat::R16,
        _ => TextureFormat::RGB24,
    };
    Ok(format)
}

/// `(bits, channels)` of an OpenCV style tag such as `16UC3`.
fn depth_tag(tag: &str) -> Option<(usize, usize)> {
    let (depth, channels) = tag.split_once('C')?;
    let bits = depth
        .strip_suffix(|c: char| matches!(c, 'U' | 'S' | 'F'))?
        .parse()
        .ok()?;
    Some((bits, channels.parse().ok()?))
}

/// Bytes per pixel the tag itself describes.
///
/// OpenCV style tags carry their depth and channel count; named tags
/// (`bgr8`, `mono16`, `bayer_rggb16`) end in the bit depth and take their
/// channel count from [`channel_count`]. Returns `None` when the tag names no
/// whole-byte depth.
pub fn tag_pixel_bytes(tag: &str) -> Option<usize> {
    let (bits, channels) = depth_tag(tag).or_else(|| {
        let digits = tag.trim_end_matches(|c: char| c.is_ascii_digit());
        let bits = tag[digits.len()..].parse().ok()?;
        Some((bits, channel_count(tag)))
    })?;
    (bits > 0 && bits % 8 == 0).then_some(bits / 8 * channels)
}

/// Canonical format tag for publishing a texture of this format.
pub fn encoding_for(format: TextureFormat) -> &'static str {
    match format {
        TextureFormat::R8 => "mono8",
        TextureFormat::RG16 => "8UC2",
        TextureFormat::RGB24 => "rgb8",
        TextureFormat::RGBA32 => "rgba8",
        TextureFormat::R16 => "mono16",
        TextureFormat::RG32 => "16UC2",
        TextureFormat::RGB48 => "16UC3",
        TextureFormat::RGBA64 => "16UC4",
        TextureFormat::RFloat => "32FC1",
        TextureFormat::RGFloat => "32FC2",
        TextureFormat::RGBAFloat => "32FC4",
    }
}
