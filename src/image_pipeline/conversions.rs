//! Pipeline conversions module
//!
//! This module contains orchestration logic for loading ROS images into
//! textures and packing textures back into messages.

mod image_to_texture;
mod texture_to_message;
pub mod types;


pub use image_to_texture::ImageToTexturePipeline;
pub use texture_to_message::{to_compressed_message, to_image_message};
pub use types::{ConversionConfig, ConversionConfigBuilder, DEFAULT_MAX_DIMENSION};
