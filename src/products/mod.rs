//! Products of vectors, and of vectors with a matrix, that collapse to a
//! single pass: outer, Kronecker, and the fused vector-matrix-vector.

pub mod dot_and_dot;
pub mod kronecker;
pub mod outer;

pub use dot_and_dot::{dot_and_dot_fused, dot_and_dot_fused_columns, dot_and_dot_naive, dot_and_dot_unrolled2};
pub use kronecker::{kronecker, kronecker_blocks, kronecker_indexed, kronecker_into};
pub use outer::{outer, outer_indexed, outer_rows, outer_walk};
