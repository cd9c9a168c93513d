use super::{accumulate_row, check_rows, check_shapes};
use crate::matrix::{Matrix, Rows};

/// Row-outer vector × matrix: zero `y`, then add `x[i] * A[i, j]` column by
/// column, re-reading `x[i]` on every step.
///
/// Writes to `y` are now sequential, which is most of the win over the
/// column-outer loops.
pub fn vec_mat_rows_no_cache(x: &[f64], a: &Matrix, y: &mut [f64]) {
    check_shapes(x, a, y);
    y.fill(0.0);

    for i in 0..a.rows() {
        for j in 0..a.cols() {
            y[j] += x[i] * a[(i, j)];
        }
    }
}

/// Row-outer vector × matrix with `x[i]` hoisted out of the column loop.
pub fn vec_mat_rows(x: &[f64], a: &Matrix, y: &mut [f64]) {
    check_shapes(x, a, y);
    y.fill(0.0);

    for i in 0..a.rows() {
        let xi = x[i];
        for j in 0..a.cols() {
            y[j] += xi * a[(i, j)];
        }
    }
}

/// Row-outer vector × matrix walking each row and `y` together.
///
/// Works on any [`Rows`] storage, dense or jagged.
///
/// ```
/// use linalg_bench::vecmat::vec_mat_rows_walk;
///
/// let a = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
/// let mut y = [0.0; 2];
/// vec_mat_rows_walk(&[1.0, 10.0], &a, &mut y);
/// assert_eq!(y, [31.0, 42.0]);
/// ```
pub fn vec_mat_rows_walk<R: Rows + ?Sized>(x: &[f64], a: &R, y: &mut [f64]) {
    check_rows(x, a, y);
    y.fill(0.0);

    for (i, &xi) in x.iter().enumerate() {
        accumulate_row(xi, a.row(i), y);
    }
}
