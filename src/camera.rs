//! Camera calibration and back-projection
//!
//! Inverts a camera's intrinsic matrix once and maps image pixels to
//! camera-space rays.

mod projection;
pub mod types;

pub use projection::{
    apply_camera_projection, back_project, pixel_to_image_plane, pixel_to_world_direction,
};
pub use types::{BackProjection, CameraInfo, WorldPoint};
