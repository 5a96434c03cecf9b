pub mod camera;
pub mod image_pipeline;
pub mod linalg;
pub mod logger;
