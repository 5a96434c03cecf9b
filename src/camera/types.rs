//! Camera calibration types

use crate::linalg::{self, Matrix};

/// Calibration record as published on a `sensor_msgs/CameraInfo` topic.
///
/// Matrix indices, row-major:
///
/// ```text
/// K          P
/// 0 1 2      0 1 2  3
/// 3 4 5      4 5 6  7
/// 6 7 8      8 9 10 11
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CameraInfo {
    pub width: u32,
    pub height: u32,
    /// Intrinsic matrix
    pub k: [f64; 9],
    /// Projection matrix
    pub p: [f64; 12],
}

impl CameraInfo {
    pub fn k_matrix(&self) -> Matrix {
        Matrix::from_mat3(&[
            [self.k[0], self.k[1], self.k[2]],
            [self.k[3], self.k[4], self.k[5]],
            [self.k[6], self.k[7], self.k[8]],
        ])
    }

    pub fn p_matrix(&self) -> [[f64; 4]; 3] {
        std::array::from_fn(|i| std::array::from_fn(|j| self.p[i * 4 + j]))
    }

    /// Inverse of K, computed once and reused for every pixel.
    pub fn inverse_intrinsics(&self) -> linalg::Result<[[f64; 3]; 3]> {
        linalg::invert(&self.k_matrix())?.to_mat3()
    }
}

/// A 3D point or direction in camera space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl WorldPoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// How a pixel is mapped through the inverse intrinsics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackProjection {
    /// Unnormalized camera-space ray direction
    #[default]
    Raw,
    /// Ray scaled so that `z == 1`, i.e. normalized image-plane coordinates
    Normalized,
}
