//! Pixel back-projection through inverted camera intrinsics.

use tracing::{debug, instrument};

use crate::camera::types::{BackProjection, CameraInfo, WorldPoint};
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::texture::Texture2D;
use crate::linalg;

/// Maps the homogeneous pixel `(x, y, 1)` through `inv_k`.
///
/// The result is a camera-space ray direction, defined only up to scale.
pub fn pixel_to_world_direction(x: f64, y: f64, inv_k: &[[f64; 3]; 3]) -> WorldPoint {
    let project = |row: &[f64; 3]| row[0] * x + row[1] * y + row[2];
    WorldPoint::new(project(&inv_k[0]), project(&inv_k[1]), project(&inv_k[2]))
}

/// Back-projects a pixel and divides by the homogeneous component.
///
/// Returns `None` when the ray is parallel to the image plane.
pub fn pixel_to_image_plane(x: f64, y: f64, inv_k: &[[f64; 3]; 3]) -> Option<WorldPoint> {
    let ray = pixel_to_world_direction(x, y, inv_k);
    if ray.z == 0.0 || !ray.z.is_finite() {
        return None;
    }
    Some(WorldPoint::new(ray.x / ray.z, ray.y / ray.z, 1.0))
}

/// Back-projects with the requested mode.
pub fn back_project(
    x: f64,
    y: f64,
    inv_k: &[[f64; 3]; 3],
    mode: BackProjection,
) -> Option<WorldPoint> {
    match mode {
        BackProjection::Raw => Some(pixel_to_world_direction(x, y, inv_k)),
        BackProjection::Normalized => pixel_to_image_plane(x, y, inv_k),
    }
}

impl CameraInfo {
    /// Maps every pixel through `project`, `x` outer and `y` inner.
    fn map_pixel_grid<T>(
        &self,
        project: impl Fn(f64, f64, &[[f64; 3]; 3]) -> T,
    ) -> linalg::Result<Vec<T>> {
        let inv_k = self.inverse_intrinsics()?;
        let (width, height) = (self.width as usize, self.height as usize);

        let mut points = Vec::with_capacity(width * height);
        for x in 0..width {
            for y in 0..height {
                points.push(project(x as f64, y as f64, &inv_k));
            }
        }
        Ok(points)
    }

    /// Back-projects every pixel of the image.
    ///
    /// Points are ordered column by column: `x` is the outer loop, so the
    /// point for pixel `(x, y)` sits at `x * height + y`. Pixels that have no
    /// normalized projection are `None`.
    #[instrument(skip(self), fields(width = self.width, height = self.height))]
    pub fn pixels_in_world(&self, mode: BackProjection) -> linalg::Result<Vec<Option<WorldPoint>>> {
        let points = self.map_pixel_grid(|x, y, inv_k| back_project(x, y, inv_k, mode))?;
        debug!(count = points.len(), "Back-projected pixel grid");
        Ok(points)
    }

    /// Unnormalized ray directions for every pixel, in the same order as
    /// [`pixels_in_world`](CameraInfo::pixels_in_world).
    pub fn pixel_rays(&self) -> linalg::Result<Vec<WorldPoint>> {
        self.map_pixel_grid(pixel_to_world_direction)
    }
}

/// Resamples a texture through the camera's inverse intrinsics.
///
/// Output pixel `(x, y)` copies the source texel at the back-projected
/// coordinate, truncated toward zero and clamped to the texture. In
/// normalized mode a pixel without a projection keeps its own value.
#[instrument(skip(texture, camera), fields(width = texture.width(), height = texture.height()))]
pub fn apply_camera_projection(
    texture: &Texture2D,
    camera: &CameraInfo,
    mode: BackProjection,
) -> Result<Texture2D> {
    let inv_k = camera.inverse_intrinsics()?;
    let mut projected = texture.clone();

    for x in 0..texture.width() {
        for y in 0..texture.height() {
            let Some(point) = back_project(x as f64, y as f64, &inv_k, mode) else {
                continue;
            };
            if let Some(texel) = texture.pixel_clamped(point.x as i64, point.y as i64) {
                projected.set_pixel(x, y, texel);
            }
        }
    }

    Ok(projected)
}
