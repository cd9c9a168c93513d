/// Matrix stored as independent row buffers.
///
/// Nothing enforces equal row lengths; kernels read `ncols()` from row 0 and
/// rely on the caller to keep the rest consistent.
pub type Jagged = Vec<Vec<f64>>;

/// Row-wise read access to a matrix, independent of how it is stored.
///
/// Kernels generic over `Rows` run unchanged on a dense [`Matrix`] and on a
/// [`Jagged`] array of rows.
///
/// [`Matrix`]: super::Matrix
pub trait Rows {
    fn nrows(&self) -> usize;

    fn row(&self, i: usize) -> &[f64];

    fn ncols(&self) -> usize {
        if self.nrows() == 0 { 0 } else { self.row(0).len() }
    }
}

impl<T: AsRef<[f64]>> Rows for [T] {
    fn nrows(&self) -> usize {
        self.len()
    }

    fn row(&self, i: usize) -> &[f64] {
        self[i].as_ref()
    }
}

impl<T: AsRef<[f64]>> Rows for Vec<T> {
    fn nrows(&self) -> usize {
        self.len()
    }

    fn row(&self, i: usize) -> &[f64] {
        self[i].as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;

    fn shape_of<R: Rows + ?Sized>(r: &R) -> (usize, usize) {
        (r.nrows(), r.ncols())
    }

    #[test]
    fn dense_and_jagged_report_same_shape() {
        let m = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let j = m.to_jagged();
        assert_eq!(shape_of(&m), (2, 3));
        assert_eq!(shape_of(&j), (2, 3));
        assert_eq!(shape_of(j.as_slice()), (2, 3));
        assert_eq!(Rows::row(&j, 1), m.row(1));
    }

    #[test]
    fn empty_jagged_has_no_columns() {
        let j: Jagged = Vec::new();
        assert_eq!(shape_of(&j), (0, 0));
    }
}
