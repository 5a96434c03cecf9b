use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    #[error("Attempt to decompose a non-square matrix: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Matrix is not invertible: no usable pivot in column {column}")]
    Singular { column: usize },

    #[error("Invalid matrix shape: {0}")]
    InvalidShape(String),
}

pub type Result<T> = std::result::Result<T, LinalgError>;
