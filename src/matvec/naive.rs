use super::check_shapes;
use crate::matrix::Matrix;

/// Textbook matrix × vector writing every partial sum back into `y[i]`.
///
/// Each inner iteration re-reads and re-writes the result slot and indexes
/// `A` by `(i, j)`. This is the reference the other variants are checked
/// against.
pub fn mat_vec_no_cache(a: &Matrix, x: &[f64], y: &mut [f64]) {
    check_shapes(a, x, y);

    for i in 0..a.rows() {
        y[i] = 0.0;
        for j in 0..a.cols() {
            y[i] += a[(i, j)] * x[j];
        }
    }
}

/// Matrix × vector keeping the running row sum in a local.
///
/// Same loop nest as [`mat_vec_no_cache`], but `y[i]` is stored once per row.
///
/// ```
/// use linalg_bench::{Matrix, matvec::mat_vec};
///
/// let a = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
/// let mut y = [0.0; 2];
/// mat_vec(&a, &[1.0, 1.0], &mut y);
/// assert_eq!(y, [3.0, 7.0]);
/// ```
pub fn mat_vec(a: &Matrix, x: &[f64], y: &mut [f64]) {
    check_shapes(a, x, y);

    for i in 0..a.rows() {
        let mut acc = 0.0;
        for j in 0..a.cols() {
            acc += a[(i, j)] * x[j];
        }
        y[i] = acc;
    }
}
