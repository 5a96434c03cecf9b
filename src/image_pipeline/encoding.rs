//! Pixel encoding module
//!
//! This module maps ROS format tags to channel counts and texture formats.

mod tag;
pub mod types;

pub use tag::{channel_count, encoding_for, tag_pixel_bytes, texture_format};
pub use types::{ChannelLayout, TextureFormat};
