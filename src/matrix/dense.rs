use std::ops::{Index, IndexMut};

use ndarray::{ArrayView2, ArrayViewMut2};
use rand::Rng;

use super::random::fill_uniform;
use super::rows::{Jagged, Rows};
use super::transpose::transpose_blocked;
use crate::error::KernelError;

/// Dense matrix stored as one contiguous row-major buffer.
///
/// Element `(i, j)` lives at `data[i * cols + j]`, so walking a row is a
/// sequential read and walking a column is a stride-`cols` read.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// A `rows`×`cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// The `n`×`n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Wrap an existing row-major buffer.
    ///
    /// The buffer length must be exactly `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, KernelError> {
        if data.len() != rows * cols {
            return Err(KernelError::InvalidLength {
                len: data.len(),
                rows,
                cols,
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from row slices.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    ///
    /// ```
    /// use linalg_bench::Matrix;
    ///
    /// let m = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
    /// assert_eq!(m.shape(), (2, 2));
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    pub fn from_rows(rows: &[&[f64]]) -> Self {
        let cols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols, "row {} has {} columns, expected {}", i, row.len(), cols);
            data.extend_from_slice(row);
        }
        Self {
            data,
            rows: rows.len(),
            cols,
        }
    }

    /// A matrix of uniform `[0, 1)` values.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let mut m = Self::zeros(rows, cols);
        fill_uniform(&mut m.data, rng);
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Row `i` as a contiguous slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Set every element to zero without reallocating.
    pub fn clear(&mut self) {
        self.data.fill(0.0);
    }

    /// A freshly allocated `cols`×`rows` transpose.
    pub fn transpose(&self) -> Self {
        let mut t = Self::zeros(self.cols, self.rows);
        transpose_blocked(&self.data, &mut t.data, self.rows, self.cols);
        t
    }

    /// Copy every row into its own buffer.
    pub fn to_jagged(&self) -> Jagged {
        (0..self.rows).map(|i| self.row(i).to_vec()).collect()
    }

    /// Borrow as an ndarray view.
    pub fn as_array(&self) -> Result<ArrayView2<'_, f64>, KernelError> {
        Ok(ArrayView2::from_shape((self.rows, self.cols), self.data.as_slice())?)
    }

    pub fn as_array_mut(&mut self) -> Result<ArrayViewMut2<'_, f64>, KernelError> {
        Ok(ArrayViewMut2::from_shape((self.rows, self.cols), self.data.as_mut_slice())?)
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

impl Rows for Matrix {
    fn nrows(&self) -> usize {
        self.rows
    }

    fn ncols(&self) -> usize {
        self.cols
    }

    fn row(&self, i: usize) -> &[f64] {
        Matrix::row(self, i)
    }
}
