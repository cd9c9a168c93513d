//! Outer product `R[i][j] = a[i] * b[j]`.
//!
//! The variants write the same values in the same order. They differ in how
//! the output position is found: index arithmetic, a single cursor over the
//! whole buffer, or one cursor per output row.

use crate::matrix::Matrix;

fn check_shapes(a: &[f64], b: &[f64], r: &Matrix) {
    assert_eq!(
        r.shape(),
        (a.len(), b.len()),
        "R: expected {}x{} for vectors of length {} and {}",
        a.len(),
        b.len(),
        a.len(),
        b.len()
    );
}

/// Outer product locating every output slot as `i * n + j`.
pub fn outer_indexed(a: &[f64], b: &[f64], r: &mut Matrix) {
    check_shapes(a, b, r);
    let n = b.len();
    let out = r.as_mut_slice();

    for i in 0..a.len() {
        for j in 0..n {
            out[i * n + j] = a[i] * b[j];
        }
    }
}

/// Outer product streaming through the output buffer with a single cursor.
pub fn outer_walk(a: &[f64], b: &[f64], r: &mut Matrix) {
    check_shapes(a, b, r);

    let products = a.iter().flat_map(|&ai| b.iter().map(move |&bj| ai * bj));
    for (dst, v) in r.as_mut_slice().iter_mut().zip(products) {
        *dst = v;
    }
}

/// Outer product with one cursor per output row and `a[i]` held in a local.
pub fn outer_rows(a: &[f64], b: &[f64], r: &mut Matrix) {
    check_shapes(a, b, r);
    if b.is_empty() {
        return;
    }

    for (row, &ai) in r.as_mut_slice().chunks_exact_mut(b.len()).zip(a) {
        for (dst, &bj) in row.iter_mut().zip(b) {
            *dst = ai * bj;
        }
    }
}

/// Allocating outer product.
///
/// ```
/// use linalg_bench::products::outer;
///
/// let r = outer(&[1.0, 2.0], &[3.0, 4.0]);
/// assert_eq!(r.as_slice(), &[3.0, 4.0, 6.0, 8.0]);
/// ```
pub fn outer(a: &[f64], b: &[f64]) -> Matrix {
    let mut r = Matrix::zeros(a.len(), b.len());
    outer_rows(a, b, &mut r);
    r
}
