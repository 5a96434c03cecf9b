//! Dense row-major matrix of `f64`

use std::ops::{Index, IndexMut, Mul};

use crate::linalg::error::{LinalgError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Builds a matrix from a flat row-major slice.
    pub fn from_row_major(rows: usize, cols: usize, data: &[f64]) -> Result<Self> {
        if rows == 0 || cols == 0 || data.len() != rows * cols {
            return Err(LinalgError::InvalidShape(format!(
                "{} values for a {}x{} matrix",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self {
            rows,
            cols,
            data: data.to_vec(),
        })
    }

    /// Builds a matrix from nested rows; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(LinalgError::InvalidShape("empty matrix".to_string()));
        }
        if let Some(bad) = rows.iter().position(|r| r.len() != cols) {
            return Err(LinalgError::InvalidShape(format!(
                "row {} has {} columns, expected {}",
                bad,
                rows[bad].len(),
                cols
            )));
        }
        let n_rows = rows.len();
        let data = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: n_rows,
            cols,
            data,
        })
    }

    pub fn from_mat3(m: &[[f64; 3]; 3]) -> Self {
        Self {
            rows: 3,
            cols: 3,
            data: m.iter().flatten().copied().collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for k in 0..self.cols {
            self.data.swap(a * self.cols + k, b * self.cols + k);
        }
    }

    pub fn column(&self, j: usize) -> Vec<f64> {
        (0..self.rows).map(|i| self[(i, j)]).collect()
    }

    pub fn set_column(&mut self, j: usize, values: &[f64]) {
        for (i, v) in values.iter().enumerate().take(self.rows) {
            self[(i, j)] = *v;
        }
    }

    pub fn mul_vec(&self, v: &[f64]) -> Vec<f64> {
        (0..self.rows)
            .map(|i| self.row(i).iter().zip(v).map(|(a, b)| a * b).sum())
            .collect()
    }

    /// Element-wise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    pub fn to_mat3(&self) -> Result<[[f64; 3]; 3]> {
        if self.rows != 3 || self.cols != 3 {
            return Err(LinalgError::InvalidShape(format!(
                "expected 3x3, got {}x{}",
                self.rows, self.cols
            )));
        }
        Ok(std::array::from_fn(|i| std::array::from_fn(|j| self[(i, j)])))
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[i * self.cols + j]
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    /// # Panics
    ///
    /// Panics when the inner dimensions differ.
    fn mul(self, rhs: Self) -> Matrix {
        assert_eq!(self.cols, rhs.rows, "matrix dimensions do not agree");
        let mut out = Matrix::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                out[(i, j)] = (0..self.cols).map(|k| self[(i, k)] * rhs[(k, j)]).sum();
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, LinalgError::InvalidShape(_)));
        assert!(Matrix::from_rows(Vec::new()).is_err());
    }

    #[test]
    fn test_from_row_major() {
        let m = Matrix::from_row_major(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
        assert_eq!(m.column(2), vec![3.0, 6.0]);
        assert!(!m.is_square());
        assert!(Matrix::from_row_major(2, 2, &[1.0]).is_err());
    }

    #[test]
    fn test_mul_identity() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let product = &m * &Matrix::identity(2);
        assert_eq!(product, m);
    }

    #[test]
    fn test_swap_rows() {
        let mut m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        m.swap_rows(0, 1);
        assert_eq!(m.row(0), &[3.0, 4.0]);
        assert_eq!(m.row(1), &[1.0, 2.0]);
    }

    #[test]
    fn test_to_mat3() {
        let m = Matrix::identity(3);
        assert_eq!(m.to_mat3().unwrap()[2], [0.0, 0.0, 1.0]);
        assert!(Matrix::identity(2).to_mat3().is_err());
    }
}
