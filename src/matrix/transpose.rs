/// Side length of the square tiles used by [`transpose_blocked`].
const TILE: usize = 32;

/// Transpose a row-major buffer: `dst = src^T`.
///
/// `src` is `rows`×`cols`, `dst` becomes `cols`×`rows`. Reads are sequential,
/// writes jump by `rows` on every element.
///
/// # Example
///
/// ```
/// use linalg_bench::matrix::transpose::transpose;
///
/// let src = vec![1.0, 2.0, 3.0,   // 2×3
///                4.0, 5.0, 6.0];
/// let mut dst = vec![0.0; 6];      // 3×2
///
/// transpose(&src, &mut dst, 2, 3);
///
/// assert_eq!(dst, vec![1.0, 4.0,
///                      2.0, 5.0,
///                      3.0, 6.0]);
/// ```
pub fn transpose(src: &[f64], dst: &mut [f64], rows: usize, cols: usize) {
    assert_eq!(src.len(), rows * cols, "src: expected {}x{}={} elements", rows, cols, rows * cols);
    assert_eq!(dst.len(), rows * cols, "dst: expected {}x{}={} elements", cols, rows, rows * cols);

    for i in 0..rows {
        for j in 0..cols {
            dst[j * rows + i] = src[i * cols + j];
        }
    }
}

/// Same result as [`transpose`], walking `TILE`×`TILE` tiles so both the
/// source rows and the destination rows of a tile stay in L1.
pub fn transpose_blocked(src: &[f64], dst: &mut [f64], rows: usize, cols: usize) {
    assert_eq!(src.len(), rows * cols, "src: expected {}x{}={} elements", rows, cols, rows * cols);
    assert_eq!(dst.len(), rows * cols, "dst: expected {}x{}={} elements", cols, rows, rows * cols);

    for ii in (0..rows).step_by(TILE) {
        let i_end = (ii + TILE).min(rows);
        for jj in (0..cols).step_by(TILE) {
            let j_end = (jj + TILE).min(cols);
            for i in ii..i_end {
                for j in jj..j_end {
                    dst[j * rows + i] = src[i * cols + j];
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocked_matches_naive_across_tile_edges() {
        for (rows, cols) in [(1, 1), (3, 70), (31, 33), (32, 32), (65, 7)] {
            let src: Vec<f64> = (0..rows * cols).map(|i| i as f64).collect();
            let mut a = vec![0.0; rows * cols];
            let mut b = vec![0.0; rows * cols];
            transpose(&src, &mut a, rows, cols);
            transpose_blocked(&src, &mut b, rows, cols);
            assert_eq!(a, b, "{}x{}", rows, cols);
        }
    }
}
