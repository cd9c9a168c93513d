use std::fmt;

use clap::ValueEnum;

/// One kernel family benchmarked against its baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Scenario {
    /// `Aᵗ·B` through the cached scratch row.
    TransposeAndDot,
    /// Row vector × jagged matrix.
    JaggedVectorMatrix,
    Outer,
    /// `a·(M·b)` without the intermediate vector.
    VectorMatrixVector,
    VectorMatrix,
    MatrixVector,
    /// `A·B` and `A·Bᵗ` over dense and jagged storage.
    MatrixMatrix,
    Kronecker,
}

impl Scenario {
    /// Every scenario, in run order.
    pub const ALL: [Scenario; 8] = [
        Scenario::TransposeAndDot,
        Scenario::JaggedVectorMatrix,
        Scenario::Outer,
        Scenario::VectorMatrixVector,
        Scenario::VectorMatrix,
        Scenario::MatrixVector,
        Scenario::MatrixMatrix,
        Scenario::Kronecker,
    ];

    /// Banner and report heading.
    pub fn label(self) -> &'static str {
        match self {
            Scenario::TransposeAndDot => "Transpose and Dot Matrix-Matrix",
            Scenario::JaggedVectorMatrix => "Jagged row-Matrix",
            Scenario::Outer => "Outer",
            Scenario::VectorMatrixVector => "Vector-Matrix-Vector",
            Scenario::VectorMatrix => "Vector-Matrix",
            Scenario::MatrixVector => "Matrix-Vector",
            Scenario::MatrixMatrix => "Dot Matrix-Matrix",
            Scenario::Kronecker => "Kronecker",
        }
    }

    /// Absolute tolerance for the pre-timing correctness check.
    ///
    /// Matrix products sum `m` terms per entry and the baseline reorders
    /// them, so they get more room than the vector kernels. The scalar
    /// vector-matrix-vector total sums `n·m` terms.
    pub fn tolerance(self) -> f64 {
        match self {
            Scenario::TransposeAndDot | Scenario::MatrixMatrix => 1e-8,
            Scenario::VectorMatrixVector => 1e-4,
            _ => 1e-10,
        }
    }

    /// Matrix-matrix scenarios cost `n³` per call.
    pub fn is_cubic(self) -> bool {
        matches!(self, Scenario::TransposeAndDot | Scenario::MatrixMatrix)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
