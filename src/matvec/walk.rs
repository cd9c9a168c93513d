use super::check_shapes;
use crate::matrix::Matrix;

/// Matrix × vector as one sequential pass over the buffer of `A`.
///
/// Every row is zipped with `x`, so the only index arithmetic left is the
/// row split; the compiler drops the bounds checks inside the row.
pub fn mat_vec_walk(a: &Matrix, x: &[f64], y: &mut [f64]) {
    check_shapes(a, x, y);
    walk_rows(a.as_slice(), x, y, a.cols());
}

/// Dot every `cols`-wide row of `rows` with `x`, one output per row.
///
/// Shared with the unrolled kernels, which hand their leftover rows here.
pub(crate) fn walk_rows(rows: &[f64], x: &[f64], y: &mut [f64], cols: usize) {
    if cols == 0 {
        y.fill(0.0);
        return;
    }

    for (row, out) in rows.chunks_exact(cols).zip(y.iter_mut()) {
        let mut acc = 0.0;
        for (&v, &xj) in row.iter().zip(x) {
            acc += v * xj;
        }
        *out = acc;
    }
}
