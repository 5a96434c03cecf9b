//! Deserialized ROS sensor message records consumed by the pipeline

/// Uncompressed image as published on a `sensor_msgs/Image` topic
#[derive(Debug, Clone, PartialEq)]
pub struct ImageMessage {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Pixel encoding tag, e.g. `bgr8` or `mono16`
    pub encoding: String,
    /// Non-zero when multi-byte samples are big endian
    pub is_bigendian: u8,
    /// Row length in bytes
    pub step: u32,
    /// Row-major pixel data, top row first
    pub data: Vec<u8>,
}

/// Compressed image as published on a `sensor_msgs/CompressedImage` topic
#[derive(Debug, Clone, PartialEq)]
pub struct CompressedImageMessage {
    /// Compression format, e.g. `jpeg` or `png`
    pub format: String,
    /// Encoded image bytes
    pub data: Vec<u8>,
}

/// Sub-window of an image, as in `sensor_msgs/RegionOfInterest`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionOfInterest {
    pub x_offset: u32,
    pub y_offset: u32,
    pub width: u32,
    pub height: u32,
}
