use super::{accumulate_row, check_rows};
use crate::matrix::Rows;
use crate::unroll::UnrollPlan;

/// Vector × matrix advancing two rows in lockstep.
///
/// Each pass over `y` folds in two rows, so `y` is read and written half as
/// often as in [`vec_mat_rows_walk`](super::vec_mat_rows_walk). The two
/// contributions are added one after the other. When the row count is odd the
/// last row goes through the single-row walk.
pub fn vec_mat_unrolled2<R: Rows + ?Sized>(x: &[f64], a: &R, y: &mut [f64]) {
    check_rows(x, a, y);
    y.fill(0.0);

    let plan = UnrollPlan::new(a.nrows(), 2);
    for block in 0..plan.blocks {
        let i = block * 2;
        let (x1, x2) = (x[i], x[i + 1]);
        let (a1, a2) = (a.row(i), a.row(i + 1));

        for ((out, &v1), &v2) in y.iter_mut().zip(a1).zip(a2) {
            *out += x1 * v1;
            *out += x2 * v2;
        }
    }

    for i in plan.remainder_start()..a.nrows() {
        accumulate_row(x[i], a.row(i), y);
    }
}

/// Vector × matrix advancing four rows in lockstep.
///
/// The four contributions are summed before touching `y`, so each element of
/// `y` is updated once per pass. The `rows % 4` leftover rows go through the
/// single-row walk.
pub fn vec_mat_unrolled4<R: Rows + ?Sized>(x: &[f64], a: &R, y: &mut [f64]) {
    check_rows(x, a, y);
    y.fill(0.0);

    let plan = UnrollPlan::new(a.nrows(), 4);
    for block in 0..plan.blocks {
        let i = block * 4;
        let (x1, x2, x3, x4) = (x[i], x[i + 1], x[i + 2], x[i + 3]);
        let (a1, a2, a3, a4) = (a.row(i), a.row(i + 1), a.row(i + 2), a.row(i + 3));

        for ((((out, &v1), &v2), &v3), &v4) in y.iter_mut().zip(a1).zip(a2).zip(a3).zip(a4) {
            *out += x1 * v1 + x2 * v2 + x3 * v3 + x4 * v4;
        }
    }

    for i in plan.remainder_start()..a.nrows() {
        accumulate_row(x[i], a.row(i), y);
    }
}
