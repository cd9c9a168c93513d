use super::check_shapes;
use super::walk::walk_rows;
use crate::matrix::Matrix;
use crate::unroll::UnrollPlan;

/// Matrix × vector computing two output rows per pass over `x`.
///
/// Every `x[j]` loaded feeds two rows, halving the traffic on `x`. Each row
/// still has its own accumulator, so the summation order per row matches
/// [`mat_vec`](super::mat_vec). A trailing odd row goes through the
/// single-row walk.
pub fn mat_vec_unrolled2(a: &Matrix, x: &[f64], y: &mut [f64]) {
    check_shapes(a, x, y);
    let cols = a.cols();
    if cols == 0 {
        y.fill(0.0);
        return;
    }

    let plan = UnrollPlan::new(a.rows(), 2);
    let (paired, rest) = a.as_slice().split_at(plan.remainder_start() * cols);
    let (y_paired, y_rest) = y.split_at_mut(plan.remainder_start());

    for (block, out) in paired.chunks_exact(2 * cols).zip(y_paired.chunks_exact_mut(2)) {
        let (a1, a2) = block.split_at(cols);

        let mut y1 = 0.0;
        let mut y2 = 0.0;
        for ((&xj, &v1), &v2) in x.iter().zip(a1).zip(a2) {
            y1 += xj * v1;
            y2 += xj * v2;
        }

        out[0] = y1;
        out[1] = y2;
    }

    walk_rows(rest, x, y_rest, cols);
}

/// Matrix × vector computing four output rows per pass over `x`.
///
/// The `rows % 4` leftover rows go through the single-row walk.
pub fn mat_vec_unrolled4(a: &Matrix, x: &[f64], y: &mut [f64]) {
    check_shapes(a, x, y);
    let cols = a.cols();
    if cols == 0 {
        y.fill(0.0);
        return;
    }

    let plan = UnrollPlan::new(a.rows(), 4);
    let (blocked, rest) = a.as_slice().split_at(plan.remainder_start() * cols);
    let (y_blocked, y_rest) = y.split_at_mut(plan.remainder_start());

    for (block, out) in blocked.chunks_exact(4 * cols).zip(y_blocked.chunks_exact_mut(4)) {
        let (a1, tail) = block.split_at(cols);
        let (a2, tail) = tail.split_at(cols);
        let (a3, a4) = tail.split_at(cols);

        let mut y1 = 0.0;
        let mut y2 = 0.0;
        let mut y3 = 0.0;
        let mut y4 = 0.0;
        for j in 0..cols {
            let xj = x[j];
            y1 += xj * a1[j];
            y2 += xj * a2[j];
            y3 += xj * a3[j];
            y4 += xj * a4[j];
        }

        out[0] = y1;
        out[1] = y2;
        out[2] = y3;
        out[3] = y4;
    }

    walk_rows(rest, x, y_rest, cols);
}
