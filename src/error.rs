//! Errors raised by the checked kernels and the ndarray baseline.

use thiserror::Error;

/// Failure of a checked kernel call.
///
/// Only the transpose-and-dot kernel and the baseline functions validate their
/// operands. Every other kernel asserts on incompatible slices instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KernelError {
    /// Operand shapes are incompatible for `op`.
    #[error("dimension mismatch in {op}: left is {}x{}, right is {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A buffer of `len` values cannot back a `rows`×`cols` matrix.
    #[error("tried to construct a {rows}x{cols} matrix over a buffer of length {len}")]
    InvalidLength { len: usize, rows: usize, cols: usize },

    /// ndarray rejected a view over one of our buffers.
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}

impl KernelError {
    pub(crate) fn mismatch(op: &'static str, left: (usize, usize), right: (usize, usize)) -> Self {
        Self::DimensionMismatch { op, left, right }
    }
}
