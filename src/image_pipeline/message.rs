//! ROS message records
//!
//! Plain data carriers for image messages; deserialization happens upstream.

pub mod types;

pub use types::{CompressedImageMessage, ImageMessage, RegionOfInterest};
