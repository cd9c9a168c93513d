/// First index where `expected` and `actual` differ by more than `tolerance`,
/// together with both values.
///
/// Lengths must match; a length difference is reported at the first index
/// past the shorter buffer with `NaN` standing in for the missing value.
pub fn first_mismatch(expected: &[f64], actual: &[f64], tolerance: f64) -> Option<(usize, f64, f64)> {
    for (i, (&e, &a)) in expected.iter().zip(actual).enumerate() {
        // `!(<=)` so that NaN counts as a mismatch
        if !((e - a).abs() <= tolerance) {
            return Some((i, e, a));
        }
    }

    let shorter = expected.len().min(actual.len());
    if expected.len() != actual.len() {
        let e = expected.get(shorter).copied().unwrap_or(f64::NAN);
        let a = actual.get(shorter).copied().unwrap_or(f64::NAN);
        return Some((shorter, e, a));
    }
    None
}

/// `true` if every element pair is within `tolerance`.
pub fn all_close(expected: &[f64], actual: &[f64], tolerance: f64) -> bool {
    first_mismatch(expected, actual, tolerance).is_none()
}

/// Largest absolute element-wise difference.
pub fn max_abs_diff(expected: &[f64], actual: &[f64]) -> f64 {
    expected
        .iter()
        .zip(actual)
        .map(|(e, a)| (e - a).abs())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_first_offending_index() {
        let e = [1.0, 2.0, 3.0];
        let a = [1.0, 2.5, 4.0];
        assert_eq!(first_mismatch(&e, &a, 1e-10), Some((1, 2.0, 2.5)));
        assert!(all_close(&e, &a, 1.0));
        assert_eq!(max_abs_diff(&e, &a), 1.0);
    }

    #[test]
    fn nan_is_never_close() {
        assert!(!all_close(&[f64::NAN], &[f64::NAN], 1.0));
    }

    #[test]
    fn length_difference_is_a_mismatch() {
        let m = first_mismatch(&[1.0, 2.0], &[1.0], 1e-10);
        assert!(matches!(m, Some((1, e, a)) if e == 2.0 && a.is_nan()));
    }
}
