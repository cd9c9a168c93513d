//! `C = Aᵗ·B` without materialising `Aᵗ`.
//!
//! A is k×m, B is k×n, C is m×n. Output row `i` collects `A[p][i] * B[p][..]`
//! over every `p`; the running sums live in a scratch row instead of in C.
//! After each output row the scratch is copied into C and zeroed for the
//! next one.
//!
//! This is the only checked kernel: incompatible shapes return
//! [`KernelError::DimensionMismatch`] rather than panicking.

use crate::error::KernelError;
use crate::matrix::Matrix;

const OP: &str = "transpose_and_dot";

fn check_shapes(a: &Matrix, b: &Matrix, c: &Matrix) -> Result<(), KernelError> {
    if a.rows() != b.rows() {
        return Err(KernelError::mismatch(OP, a.shape(), b.shape()));
    }
    if c.shape() != (a.cols(), b.cols()) {
        return Err(KernelError::mismatch(OP, (a.cols(), b.cols()), c.shape()));
    }
    Ok(())
}

/// `C = Aᵗ·B` using a caller-owned scratch row. Performs no heap allocation.
///
/// `scratch` needs at least `b.cols()` entries; it is zeroed on entry and is
/// left zeroed on return.
pub fn transpose_and_dot_with_scratch(
    a: &Matrix,
    b: &Matrix,
    c: &mut Matrix,
    scratch: &mut [f64],
) -> Result<(), KernelError> {
    check_shapes(a, b, c)?;
    let n = b.cols();
    if scratch.len() < n {
        return Err(KernelError::mismatch(OP, (1, n), (1, scratch.len())));
    }

    let cache = &mut scratch[..n];
    cache.fill(0.0);

    for i in 0..a.cols() {
        for p in 0..a.rows() {
            let api = a[(p, i)];
            for (acc, &bv) in cache.iter_mut().zip(b.row(p)) {
                *acc += api * bv;
            }
        }

        c.row_mut(i).copy_from_slice(cache);
        cache.fill(0.0);
    }

    Ok(())
}

/// `C = Aᵗ·B`, allocating the scratch row once for the whole call.
pub fn transpose_and_dot_into(a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<(), KernelError> {
    let mut scratch = vec![0.0; b.cols()];
    transpose_and_dot_with_scratch(a, b, c, &mut scratch)
}

/// Allocating `Aᵗ·B`.
///
/// ```
/// use linalg_bench::{Matrix, gemm::transpose_and_dot};
///
/// let a = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
/// let b = Matrix::identity(2);
/// let c = transpose_and_dot(&a, &b).unwrap();
/// assert_eq!(c.as_slice(), &[1.0, 3.0, 2.0, 4.0]);
/// ```
pub fn transpose_and_dot(a: &Matrix, b: &Matrix) -> Result<Matrix, KernelError> {
    let mut c = Matrix::zeros(a.cols(), b.cols());
    transpose_and_dot_into(a, b, &mut c)?;
    Ok(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_row_count_mismatch() {
        let a = Matrix::zeros(3, 2);
        let b = Matrix::zeros(4, 2);
        let err = transpose_and_dot(&a, &b).unwrap_err();
        assert!(matches!(
            err,
            KernelError::DimensionMismatch {
                left: (3, 2),
                right: (4, 2),
                ..
            }
        ));
    }

    #[test]
    fn rejects_wrong_output_shape() {
        let a = Matrix::zeros(3, 2);
        let b = Matrix::zeros(3, 5);
        let mut c = Matrix::zeros(5, 2);
        assert!(transpose_and_dot_into(&a, &b, &mut c).is_err());
    }

    #[test]
    fn rejects_short_scratch() {
        let a = Matrix::zeros(3, 2);
        let b = Matrix::zeros(3, 5);
        let mut c = Matrix::zeros(2, 5);
        let mut scratch = [0.0; 4];
        assert!(transpose_and_dot_with_scratch(&a, &b, &mut c, &mut scratch).is_err());
    }

    #[test]
    fn scratch_is_left_zeroed_even_if_dirty_on_entry() {
        let a = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
        let b = Matrix::from_rows(&[&[1.0, 0.0, 2.0], &[0.0, 1.0, 0.0], &[1.0, 1.0, 1.0]]);
        let mut c = Matrix::zeros(2, 3);
        let mut scratch = [9.0; 5];

        transpose_and_dot_with_scratch(&a, &b, &mut c, &mut scratch).unwrap();

        assert_eq!(&scratch[..3], &[0.0, 0.0, 0.0]);
        assert_eq!(&scratch[3..], &[9.0, 9.0]);
        assert_eq!(c.as_slice(), &[6.0, 8.0, 7.0, 8.0, 10.0, 10.0]);
    }
}
