use tracing::debug;

use super::BenchError;
use super::scenario::Scenario;
use crate::matrix::compare::{first_mismatch, max_abs_diff};

/// Fail the run if `actual` strays from `expected` by more than the
/// scenario's tolerance anywhere.
pub fn ensure_close(scenario: Scenario, variant: &str, expected: &[f64], actual: &[f64]) -> Result<(), BenchError> {
    let tolerance = scenario.tolerance();
    if let Some((index, e, a)) = first_mismatch(expected, actual, tolerance) {
        return Err(BenchError::Mismatch {
            scenario,
            variant: variant.to_string(),
            index,
            expected: e,
            actual: a,
            tolerance,
        });
    }
    debug!(%scenario, variant, max_diff = max_abs_diff(expected, actual), "variant matches baseline");
    Ok(())
}

/// Scalar form of [`ensure_close`].
pub fn ensure_close_scalar(scenario: Scenario, variant: &str, expected: f64, actual: f64) -> Result<(), BenchError> {
    ensure_close(scenario, variant, &[expected], &[actual])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_names_the_variant() {
        let err = ensure_close(Scenario::MatrixVector, "x4", &[1.0, 2.0], &[1.0, 2.1]).unwrap_err();
        match err {
            BenchError::Mismatch { variant, index, .. } => {
                assert_eq!(variant, "x4");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn scalar_tolerance_is_scenario_specific() {
        assert!(ensure_close_scalar(Scenario::VectorMatrixVector, "fused", 1.0, 1.0 + 1e-6).is_ok());
        assert!(ensure_close_scalar(Scenario::MatrixVector, "fused", 1.0, 1.0 + 1e-6).is_err());
    }
}
