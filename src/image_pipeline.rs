//! Image processing pipeline module
//!
//! This module loads ROS image messages into textures, with separate modules
//! for format tag lookups, the byte-level pixel codec, compressed image
//! decoding, and conversion orchestration.

pub mod codec;
pub mod common;
pub mod compressed;
pub mod conversions;
pub mod encoding;
pub mod message;
pub mod texture;

pub use common::{
    ConversionError,
    Result,
};

pub use codec::{
    PixelLayout,
    reorder_pixels,
    reorder_with_layout,
};

pub use encoding::{
    ChannelLayout,
    TextureFormat,
    channel_count,
    encoding_for,
    tag_pixel_bytes,
    texture_format,
};

pub use compressed::{
    CompressedFormat,
    CompressedImageDecoder,
    CompressedImageEncoder,
    ImageCrateCodec,
    encode_compressed,
};

pub use message::{
    CompressedImageMessage,
    ImageMessage,
    RegionOfInterest,
};

pub use texture::{
    Texture2D,
    highlight_region,
};

pub use conversions::{
    ConversionConfig,
    ConversionConfigBuilder,
    ImageToTexturePipeline,
    to_compressed_message,
    to_image_message,
};
