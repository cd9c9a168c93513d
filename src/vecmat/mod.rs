//! Row vector × matrix: `y = xᵗ·A`.
//!
//! `x` has one entry per row of `A`, `y` one entry per column. In row-major
//! storage a column is a stride-`cols` walk, so the natural column-outer loop
//! is cache hostile. The variants here trade that for row-outer passes that
//! accumulate into `y`:
//!
//! - `column`: column-outer loops (poor locality, the starting point)
//! - `rows`: row-outer accumulation into a zeroed `y`
//! - `unrolled`: 2 or 4 rows advanced in lockstep per pass over `y`
//!
//! The row-walk and unrolled kernels are generic over [`Rows`], so they run
//! unchanged on jagged storage.

use crate::matrix::{Matrix, Rows};

pub mod column;
pub mod rows;
pub mod unrolled;

pub use column::{vec_mat_column, vec_mat_column_no_cache, vec_mat_column_walk};
pub use rows::{vec_mat_rows, vec_mat_rows_no_cache, vec_mat_rows_walk};
pub use unrolled::{vec_mat_unrolled2, vec_mat_unrolled4};

fn check_shapes(x: &[f64], a: &Matrix, y: &[f64]) {
    check_rows(x, a, y);
}

fn check_rows<R: Rows + ?Sized>(x: &[f64], a: &R, y: &[f64]) {
    assert_eq!(x.len(), a.nrows(), "x: expected {} elements, one per matrix row", a.nrows());
    assert_eq!(y.len(), a.ncols(), "y: expected {} elements, one per matrix column", a.ncols());
}

/// `y += xi * row`, walking both sequentially.
#[inline]
pub(crate) fn accumulate_row(xi: f64, row: &[f64], y: &mut [f64]) {
    for (out, &v) in y.iter_mut().zip(row) {
        *out += xi * v;
    }
}
