//! Dense linear algebra
//!
//! A small row-major matrix type and an LU solver, sized for inverting camera
//! intrinsics but general over `n`.

mod error;
mod lu;
mod matrix;

pub use error::{LinalgError, Result};
pub use lu::{LuDecomposition, invert};
pub use matrix::Matrix;
