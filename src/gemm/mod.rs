//! Matrix × matrix in its three shapes: `A·B`, `A·Bᵗ` and `Aᵗ·B`.
//!
//! `dot` and `dot_with_transposed` are generic over [`Rows`], one function
//! for every pairing of dense and jagged operands. The output is always a
//! dense [`Matrix`] that the kernels overwrite.
//!
//! Available implementations:
//! - `naive`: textbook i-j-k / i-k-j loops, the correctness baseline
//! - `dot`: i-k-j over row slices, any storage
//! - `dot_transposed`: row·row dot products for `A·Bᵗ`
//! - `transpose_and_dot`: `Aᵗ·B` through a cached row of partial sums

use crate::matrix::{Matrix, Rows};

pub mod dot;
pub mod dot_transposed;
pub mod naive;
pub mod transpose_and_dot;

pub use dot::dot;
pub use dot_transposed::dot_with_transposed;
pub use naive::{dot_naive_ijk, dot_naive_ikj, transpose_then_dot};
pub use transpose_and_dot::{transpose_and_dot, transpose_and_dot_into, transpose_and_dot_with_scratch};

fn check_dot<A, B>(a: &A, b: &B, c: &Matrix)
where
    A: Rows + ?Sized,
    B: Rows + ?Sized,
{
    let (m, k, n) = (a.nrows(), a.ncols(), b.ncols());
    assert_eq!(b.nrows(), k, "B: expected {} rows to match the columns of A", k);
    assert_eq!(c.shape(), (m, n), "C: expected {}x{}", m, n);
}
