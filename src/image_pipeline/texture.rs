//! Texture module
//!
//! Decoded images in canonical texture formats, plus region-of-interest helpers.

mod region;
pub mod types;

pub use region::highlight_region;
pub use types::Texture2D;
