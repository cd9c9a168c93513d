use super::check_shapes;
use crate::matrix::Matrix;

/// Column-outer vector × matrix accumulating straight into `y[j]`.
///
/// Reference implementation: every inner step jumps a full row ahead in `A`
/// and re-writes the result slot.
pub fn vec_mat_column_no_cache(x: &[f64], a: &Matrix, y: &mut [f64]) {
    check_shapes(x, a, y);

    for j in 0..a.cols() {
        y[j] = 0.0;
        for i in 0..a.rows() {
            y[j] += x[i] * a[(i, j)];
        }
    }
}

/// Column-outer vector × matrix with a local accumulator per column.
pub fn vec_mat_column(x: &[f64], a: &Matrix, y: &mut [f64]) {
    check_shapes(x, a, y);

    for j in 0..a.cols() {
        let mut acc = 0.0;
        for i in 0..a.rows() {
            acc += x[i] * a[(i, j)];
        }
        y[j] = acc;
    }
}

/// Column-outer vector × matrix as a strided walk down each column.
pub fn vec_mat_column_walk(x: &[f64], a: &Matrix, y: &mut [f64]) {
    check_shapes(x, a, y);
    if a.rows() == 0 {
        y.fill(0.0);
        return;
    }
    let cols = a.cols();
    let data = a.as_slice();

    for (j, out) in y.iter_mut().enumerate() {
        let mut acc = 0.0;
        for (&xi, &v) in x.iter().zip(data[j..].iter().step_by(cols)) {
            acc += xi * v;
        }
        *out = acc;
    }
}
