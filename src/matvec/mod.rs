//! Matrix × vector: `y = A·x`.
//!
//! `A` is rows×cols, `x` has `cols` entries and `y` has `rows` entries. The
//! variants only differ in how they walk memory; every one of them sums a
//! row in column order, so they agree with the reference up to rounding of
//! the final store.
//!
//! Available implementations:
//! - `naive`: double loop, with and without a per-row accumulator
//! - `walk`: sequential walk over one row and `x` together
//! - `unrolled`: 2 or 4 rows per pass over `x`

use crate::matrix::Matrix;

pub mod naive;
pub mod unrolled;
pub mod walk;

pub use naive::{mat_vec, mat_vec_no_cache};
pub use unrolled::{mat_vec_unrolled2, mat_vec_unrolled4};
pub use walk::mat_vec_walk;

fn check_shapes(a: &Matrix, x: &[f64], y: &[f64]) {
    assert_eq!(x.len(), a.cols(), "x: expected {} elements for a {}x{} matrix", a.cols(), a.rows(), a.cols());
    assert_eq!(y.len(), a.rows(), "y: expected {} elements for a {}x{} matrix", a.rows(), a.rows(), a.cols());
}
