//! Vector-matrix-vector `a·(M·b)`.
//!
//! `a` has one entry per row of `M`, `b` one per column. The fused kernels
//! never materialise `M·b`: each row sum is folded into the scalar total as
//! soon as it is complete. They allocate nothing.

use crate::matrix::Matrix;
use crate::matvec::mat_vec_no_cache;
use crate::unroll::UnrollPlan;

fn check_shapes(a: &[f64], m: &Matrix, b: &[f64]) {
    assert_eq!(a.len(), m.rows(), "a: expected {} elements, one per matrix row", m.rows());
    assert_eq!(b.len(), m.cols(), "b: expected {} elements, one per matrix column", m.cols());
}

/// Two-step reference: materialise `M·b`, then dot it with `a`.
pub fn dot_and_dot_naive(a: &[f64], m: &Matrix, b: &[f64]) -> f64 {
    check_shapes(a, m, b);
    let mut mb = vec![0.0; m.rows()];
    mat_vec_no_cache(m, b, &mut mb);

    let mut total = 0.0;
    for (&ai, &v) in a.iter().zip(&mb) {
        total += ai * v;
    }
    total
}

/// Row-major fused `a·(M·b)`.
pub fn dot_and_dot_fused(a: &[f64], m: &Matrix, b: &[f64]) -> f64 {
    check_shapes(a, m, b);

    let mut total = 0.0;
    for (i, &ai) in a.iter().enumerate() {
        let mut s = 0.0;
        for (&v, &bj) in m.row(i).iter().zip(b) {
            s += v * bj;
        }
        total += ai * s;
    }
    total
}

/// Column-outer fused `(aᵗ·M)·b`.
///
/// Same value up to reassociation, but every inner step strides down a
/// column.
pub fn dot_and_dot_fused_columns(a: &[f64], m: &Matrix, b: &[f64]) -> f64 {
    check_shapes(a, m, b);

    let mut total = 0.0;
    for (j, &bj) in b.iter().enumerate() {
        let mut s = 0.0;
        for (i, &ai) in a.iter().enumerate() {
            s += ai * m[(i, j)];
        }
        total += bj * s;
    }
    total
}

/// Fused `a·(M·b)` over two rows per outer iteration.
///
/// Both partial row sums are built in one pass over `b`, then
/// `a[i]*s1 + a[i+1]*s2` is added to the total. An odd last row is summed on
/// its own.
pub fn dot_and_dot_unrolled2(a: &[f64], m: &Matrix, b: &[f64]) -> f64 {
    check_shapes(a, m, b);

    let plan = UnrollPlan::new(m.rows(), 2);
    let mut total = 0.0;

    for block in 0..plan.blocks {
        let i = block * 2;
        let mut s1 = 0.0;
        let mut s2 = 0.0;
        for ((&v1, &v2), &bj) in m.row(i).iter().zip(m.row(i + 1)).zip(b) {
            s1 += v1 * bj;
            s2 += v2 * bj;
        }
        total += a[i] * s1 + a[i + 1] * s2;
    }

    for i in plan.remainder_start()..m.rows() {
        let mut s = 0.0;
        for (&v, &bj) in m.row(i).iter().zip(b) {
            s += v * bj;
        }
        total += a[i] * s;
    }

    total
}
