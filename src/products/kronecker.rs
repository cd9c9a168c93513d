//! Kronecker products.
//!
//! For vectors, `a ⊗ b` is the length `m·n` vector
//! `[a0*b0, a0*b1, …, a1*b0, …]`, the flattened outer product. For matrices
//! every element `a[i][j]` scales a full copy of `b` placed at block
//! `(i, j)`.

use crate::matrix::{Matrix, Rows};

fn check_len(a: &[f64], b: &[f64], out: &[f64]) {
    assert_eq!(
        out.len(),
        a.len() * b.len(),
        "out: expected {}*{}={} elements",
        a.len(),
        b.len(),
        a.len() * b.len()
    );
}

/// Vector Kronecker product computing every position as `i * n + j`.
pub fn kronecker_indexed(a: &[f64], b: &[f64], out: &mut [f64]) {
    check_len(a, b, out);
    let n = b.len();

    for i in 0..a.len() {
        for j in 0..n {
            out[i * n + j] = a[i] * b[j];
        }
    }
}

/// Vector Kronecker product writing one `n`-wide block per element of `a`.
pub fn kronecker_into(a: &[f64], b: &[f64], out: &mut [f64]) {
    check_len(a, b, out);
    if b.is_empty() {
        return;
    }

    for (block, &ai) in out.chunks_exact_mut(b.len()).zip(a) {
        for (dst, &bj) in block.iter_mut().zip(b) {
            *dst = ai * bj;
        }
    }
}

/// Allocating vector Kronecker product.
///
/// ```
/// use linalg_bench::products::kronecker;
///
/// assert_eq!(kronecker(&[1.0, 2.0], &[10.0, 20.0]), vec![10.0, 20.0, 20.0, 40.0]);
/// ```
pub fn kronecker(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; a.len() * b.len()];
    kronecker_into(a, b, &mut out);
    out
}

/// Block Kronecker product `A ⊗ B` of any row storage `A` with a dense `B`.
///
/// `out` must be `(arows·brows)`×`(acols·bcols)`; `a[i][j] * b[k][l]` lands
/// at `(i·brows + k, j·bcols + l)`.
pub fn kronecker_blocks<R: Rows + ?Sized>(a: &R, b: &Matrix, out: &mut Matrix) {
    let (brows, bcols) = b.shape();
    assert_eq!(
        out.shape(),
        (a.nrows() * brows, a.ncols() * bcols),
        "out: expected {}x{}",
        a.nrows() * brows,
        a.ncols() * bcols
    );

    for i in 0..a.nrows() {
        for (j, &aval) in a.row(i).iter().enumerate() {
            for k in 0..brows {
                let dst = &mut out.row_mut(i * brows + k)[j * bcols..(j + 1) * bcols];
                for (d, &bv) in dst.iter_mut().zip(b.row(k)) {
                    *d = aval * bv;
                }
            }
        }
    }
}
