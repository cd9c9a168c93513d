//! The benchmark harness: size schedule, warm-up and timing, correctness
//! gate, and the Markdown report.

use std::io;

use thiserror::Error;

use crate::error::KernelError;

pub mod check;
pub mod config;
pub mod driver;
pub mod report;
pub mod scenario;
pub mod timing;

pub use config::{BenchConfig, ProblemSize};
pub use driver::Driver;
pub use report::{Report, Row, Table};
pub use scenario::Scenario;

/// Anything that aborts a benchmark run.
#[derive(Debug, Error)]
pub enum BenchError {
    /// A variant disagreed with the baseline before timing started.
    #[error(
        "{scenario}: variant `{variant}` differs from the baseline at index {index} \
         (expected {expected}, got {actual}, tolerance {tolerance:e})"
    )]
    Mismatch {
        scenario: Scenario,
        variant: String,
        index: usize,
        expected: f64,
        actual: f64,
        tolerance: f64,
    },

    #[error(transparent)]
    Kernel(#[from] KernelError),

    #[error("failed to write benchmark output")]
    Io(#[from] io::Error),
}
