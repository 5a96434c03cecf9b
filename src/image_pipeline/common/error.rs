use thiserror::Error;

use crate::linalg::LinalgError;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode compressed image: {0}")]
    DecodeError(String),

    #[error("Failed to encode compressed image: {0}")]
    EncodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Format not supported for this operation: {0}")]
    UnsupportedFormat(String),

    #[error("Region {width}x{height} at ({x_offset}, {y_offset}) lies outside the texture")]
    InvalidRegion {
        x_offset: usize,
        y_offset: usize,
        width: usize,
        height: usize,
    },

    #[error(transparent)]
    Linalg(#[from] LinalgError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
