use super::check_dot;
use crate::matrix::Matrix;

/// Naive matrix multiplication using i-j-k loop order: `C = A·B`.
///
/// The innermost loop walks a column of B with stride `n`, missing cache on
/// every step for large matrices. Use it as a correctness baseline, not for
/// performance.
pub fn dot_naive_ijk(a: &Matrix, b: &Matrix, c: &mut Matrix) {
    check_dot(a, b, c);
    let (m, k) = a.shape();
    let n = b.cols();

    for i in 0..m {
        for j in 0..n {
            let mut acc = 0.0;
            for p in 0..k {
                acc += a[(i, p)] * b[(p, j)];
            }
            c[(i, j)] = acc;
        }
    }
}

/// i-k-j order: the innermost loop walks B and C sequentially.
///
/// Every `C[i][j]` still receives its `k` terms in increasing `p`, so the
/// result is bit-identical to [`dot_naive_ijk`].
pub fn dot_naive_ikj(a: &Matrix, b: &Matrix, c: &mut Matrix) {
    check_dot(a, b, c);
    let (m, k) = a.shape();
    let n = b.cols();
    c.clear();

    for i in 0..m {
        for p in 0..k {
            let aip = a[(i, p)];
            for j in 0..n {
                c[(i, j)] += aip * b[(p, j)];
            }
        }
    }
}

/// Reference `C = Aᵗ·B`: transpose A explicitly, then multiply.
pub fn transpose_then_dot(a: &Matrix, b: &Matrix, c: &mut Matrix) {
    let at = a.transpose();
    dot_naive_ijk(&at, b, c);
}
