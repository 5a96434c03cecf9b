//! Pixel format codec
//!
//! Byte-level channel swap and vertical flip for raw image buffers.

mod layout;
mod reorder;

pub use layout::PixelLayout;
pub use reorder::{reorder_pixels, reorder_with_layout};
