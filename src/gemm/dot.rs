use super::check_dot;
use crate::matrix::{Matrix, Rows};

/// `C = A·B` for any pairing of dense and jagged operands.
///
/// i-k-j order over row slices: row `i` of C is zeroed, then every `A[i][p]`
/// scales row `p` of B into it. All inner accesses are sequential.
///
/// ```
/// use linalg_bench::{Matrix, gemm::dot};
///
/// let a = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
/// let b = Matrix::from_rows(&[&[7.0, 8.0], &[9.0, 10.0], &[11.0, 12.0]]);
/// let mut c = Matrix::zeros(2, 2);
///
/// dot(&a, &b, &mut c);
/// assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
/// ```
pub fn dot<A, B>(a: &A, b: &B, c: &mut Matrix)
where
    A: Rows + ?Sized,
    B: Rows + ?Sized,
{
    check_dot(a, b, c);

    for i in 0..a.nrows() {
        let out = c.row_mut(i);
        out.fill(0.0);
        for (p, &aip) in a.row(i).iter().enumerate() {
            for (dst, &bv) in out.iter_mut().zip(b.row(p)) {
                *dst += aip * bv;
            }
        }
    }
}
