use crate::matrix::{Matrix, Rows};

/// `C = A·Bᵗ`, with `B` given untransposed.
///
/// `C[i][j]` is the dot product of row `i` of A with row `j` of B, so both
/// operands are read sequentially and no transpose is materialised.
pub fn dot_with_transposed<A, B>(a: &A, b: &B, c: &mut Matrix)
where
    A: Rows + ?Sized,
    B: Rows + ?Sized,
{
    let (m, n) = (a.nrows(), b.nrows());
    assert_eq!(b.ncols(), a.ncols(), "B: expected {} columns to match the columns of A", a.ncols());
    assert_eq!(c.shape(), (m, n), "C: expected {}x{}", m, n);

    for i in 0..m {
        let ar = a.row(i);
        for (j, dst) in c.row_mut(i).iter_mut().enumerate() {
            let mut acc = 0.0;
            for (&x, &y) in ar.iter().zip(b.row(j)) {
                acc += x * y;
            }
            *dst = acc;
        }
    }
}
