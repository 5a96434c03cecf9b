//! Compressed image module
//!
//! This module decodes and encodes PNG/JPEG payloads to and from textures.

mod decoder;
mod image_codec;
pub mod types;

pub use decoder::{CompressedImageDecoder, CompressedImageEncoder};
pub use image_codec::{ImageCrateCodec, encode_compressed};
pub use types::CompressedFormat;
