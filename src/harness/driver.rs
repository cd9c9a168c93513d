//! Runs every scenario over the size schedule.
//!
//! For each problem size the driver draws fresh random operands, then for
//! each scenario:
//!
//! 1. warms up the baseline and every variant, checking each variant's
//!    output against the baseline (a mismatch aborts the run);
//! 2. times `trials` back-to-back calls of the baseline and of every timed
//!    variant, printing one line per timing;
//! 3. records baseline vs. headline variant as a report row.
//!
//! All operands and output buffers are allocated before timing starts.

use std::io::{self, Write};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::BenchError;
use super::check::ensure_close;
use super::config::{BenchConfig, ProblemSize};
use super::report::{Report, Row};
use super::scenario::Scenario;
use super::timing::{millis, time_trials, warm_up};
use crate::error::KernelError;
use crate::matrix::{Jagged, Matrix, random_vector};
use crate::{baseline, gemm, matvec, products, vecmat};

/// Every kernel, baseline included, writes into a caller-owned matrix.
/// Vector results use a `1×len` matrix, scalars a `1×1` one.
type Kernel<'a> = Box<dyn FnMut(&mut Matrix) -> Result<(), KernelError> + 'a>;

struct Variant<'a> {
    label: &'static str,
    timed: bool,
    kernel: Kernel<'a>,
}

impl<'a> Variant<'a> {
    fn timed(label: &'static str, kernel: impl FnMut(&mut Matrix) -> Result<(), KernelError> + 'a) -> Self {
        Self {
            label,
            timed: true,
            kernel: Box::new(kernel),
        }
    }

    /// Checked against the baseline but not timed.
    fn checked(label: &'static str, kernel: impl FnMut(&mut Matrix) -> Result<(), KernelError> + 'a) -> Self {
        Self {
            label,
            timed: false,
            kernel: Box::new(kernel),
        }
    }
}

/// What one scenario runs at one size.
struct Plan<'a> {
    shape: (usize, usize),
    baseline: Kernel<'a>,
    /// The variant reported as "Proposed".
    headline: Variant<'a>,
    others: Vec<Variant<'a>>,
}

/// Random operands for one problem size, shared by every scenario.
struct Inputs {
    n_by_m: Matrix,
    n_by_m_jagged: Jagged,
    m_by_n: Matrix,
    m_by_p: Matrix,
    p_by_m: Matrix,
    n_vec: Vec<f64>,
    m_vec: Vec<f64>,
}

impl Inputs {
    fn generate(size: ProblemSize, rng: &mut StdRng) -> Self {
        let n_by_m = Matrix::random(size.n, size.m, rng);
        let m_by_p = Matrix::random(size.m, size.p, rng);
        Self {
            n_by_m_jagged: n_by_m.to_jagged(),
            m_by_n: n_by_m.transpose(),
            p_by_m: m_by_p.transpose(),
            n_vec: random_vector(size.n, rng),
            m_vec: random_vector(size.m, rng),
            n_by_m,
            m_by_p,
        }
    }
}

fn plan(scenario: Scenario, inputs: &Inputs) -> Plan<'_> {
    let Inputs {
        n_by_m,
        n_by_m_jagged,
        m_by_n,
        m_by_p,
        p_by_m,
        n_vec,
        m_vec,
    } = inputs;
    let (n, m) = n_by_m.shape();

    match scenario {
        Scenario::TransposeAndDot => {
            let mut scratch = vec![0.0; m_by_p.cols()];
            Plan {
                shape: (m_by_n.cols(), m_by_p.cols()),
                baseline: Box::new(move |c: &mut Matrix| baseline::transpose_and_dot(m_by_n, m_by_p, c)),
                headline: Variant::timed("cached row, reused scratch", move |c| {
                    gemm::transpose_and_dot_with_scratch(m_by_n, m_by_p, c, &mut scratch)
                }),
                others: vec![
                    Variant::timed("cached row, scratch per call", move |c| {
                        gemm::transpose_and_dot_into(m_by_n, m_by_p, c)
                    }),
                    Variant::checked("explicit transpose, naive dot", move |c| {
                        gemm::transpose_then_dot(m_by_n, m_by_p, c);
                        Ok(())
                    }),
                ],
            }
        }
        Scenario::JaggedVectorMatrix => Plan {
            shape: (1, m),
            baseline: Box::new(move |c: &mut Matrix| baseline::vec_mat(n_vec, n_by_m, c.as_mut_slice())),
            headline: Variant::timed("jagged row walk", move |c| {
                vecmat::vec_mat_rows_walk(n_vec, n_by_m_jagged, c.as_mut_slice());
                Ok(())
            }),
            others: vec![
                Variant::timed("jagged rows unrolled x2", move |c| {
                    vecmat::vec_mat_unrolled2(n_vec, n_by_m_jagged, c.as_mut_slice());
                    Ok(())
                }),
                Variant::timed("jagged rows unrolled x4", move |c| {
                    vecmat::vec_mat_unrolled4(n_vec, n_by_m_jagged, c.as_mut_slice());
                    Ok(())
                }),
            ],
        },
        Scenario::Outer => Plan {
            shape: (n, m),
            baseline: Box::new(move |c: &mut Matrix| baseline::outer(n_vec, m_vec, c)),
            headline: Variant::timed("single cursor", move |c| {
                products::outer_walk(n_vec, m_vec, c);
                Ok(())
            }),
            others: vec![
                Variant::timed("cursor per row", move |c| {
                    products::outer_rows(n_vec, m_vec, c);
                    Ok(())
                }),
                Variant::timed("indexed", move |c| {
                    products::outer_indexed(n_vec, m_vec, c);
                    Ok(())
                }),
            ],
        },
        Scenario::VectorMatrixVector => Plan {
            shape: (1, 1),
            baseline: Box::new(move |c: &mut Matrix| -> Result<(), KernelError> {
                c.as_mut_slice()[0] = baseline::dot_and_dot(n_vec, n_by_m, m_vec)?;
                Ok(())
            }),
            headline: Variant::timed("no intermediate, unrolled x2", move |c| {
                c.as_mut_slice()[0] = products::dot_and_dot_unrolled2(n_vec, n_by_m, m_vec);
                Ok(())
            }),
            others: vec![
                Variant::timed("no intermediate", move |c| {
                    c.as_mut_slice()[0] = products::dot_and_dot_fused(n_vec, n_by_m, m_vec);
                    Ok(())
                }),
                Variant::checked("no intermediate, column-outer", move |c| {
                    c.as_mut_slice()[0] = products::dot_and_dot_fused_columns(n_vec, n_by_m, m_vec);
                    Ok(())
                }),
            ],
        },
        Scenario::VectorMatrix => Plan {
            shape: (1, m),
            baseline: Box::new(move |c: &mut Matrix| baseline::vec_mat(n_vec, n_by_m, c.as_mut_slice())),
            headline: Variant::timed("row walk, unrolled x2", move |c| {
                vecmat::vec_mat_unrolled2(n_vec, n_by_m, c.as_mut_slice());
                Ok(())
            }),
            others: vec![
                Variant::checked("column-outer, no cache", move |c| {
                    vecmat::vec_mat_column_no_cache(n_vec, n_by_m, c.as_mut_slice());
                    Ok(())
                }),
                Variant::checked("column-outer", move |c| {
                    vecmat::vec_mat_column(n_vec, n_by_m, c.as_mut_slice());
                    Ok(())
                }),
                Variant::checked("column-outer walk", move |c| {
                    vecmat::vec_mat_column_walk(n_vec, n_by_m, c.as_mut_slice());
                    Ok(())
                }),
                Variant::checked("row-outer, no cache", move |c| {
                    vecmat::vec_mat_rows_no_cache(n_vec, n_by_m, c.as_mut_slice());
                    Ok(())
                }),
                Variant::checked("row-outer", move |c| {
                    vecmat::vec_mat_rows(n_vec, n_by_m, c.as_mut_slice());
                    Ok(())
                }),
                Variant::timed("row walk", move |c| {
                    vecmat::vec_mat_rows_walk(n_vec, n_by_m, c.as_mut_slice());
                    Ok(())
                }),
                Variant::timed("row walk, unrolled x4", move |c| {
                    vecmat::vec_mat_unrolled4(n_vec, n_by_m, c.as_mut_slice());
                    Ok(())
                }),
            ],
        },
        Scenario::MatrixVector => Plan {
            shape: (1, n),
            baseline: Box::new(move |c: &mut Matrix| baseline::mat_vec(n_by_m, m_vec, c.as_mut_slice())),
            headline: Variant::timed("row walk, unrolled x2", move |c| {
                matvec::mat_vec_unrolled2(n_by_m, m_vec, c.as_mut_slice());
                Ok(())
            }),
            others: vec![
                Variant::checked("no cache", move |c| {
                    matvec::mat_vec_no_cache(n_by_m, m_vec, c.as_mut_slice());
                    Ok(())
                }),
                Variant::checked("row accumulator", move |c| {
                    matvec::mat_vec(n_by_m, m_vec, c.as_mut_slice());
                    Ok(())
                }),
                Variant::timed("row walk", move |c| {
                    matvec::mat_vec_walk(n_by_m, m_vec, c.as_mut_slice());
                    Ok(())
                }),
                Variant::timed("row walk, unrolled x4", move |c| {
                    matvec::mat_vec_unrolled4(n_by_m, m_vec, c.as_mut_slice());
                    Ok(())
                }),
            ],
        },
        Scenario::MatrixMatrix => Plan {
            shape: (n, m_by_p.cols()),
            baseline: Box::new(move |c: &mut Matrix| baseline::dot(n_by_m, m_by_p, c)),
            headline: Variant::timed("i-k-j dense", move |c| {
                gemm::dot(n_by_m, m_by_p, c);
                Ok(())
            }),
            others: vec![
                Variant::timed("i-k-j jagged A", move |c| {
                    gemm::dot(n_by_m_jagged, m_by_p, c);
                    Ok(())
                }),
                Variant::timed("row dots against B transposed", move |c| {
                    gemm::dot_with_transposed(n_by_m, p_by_m, c);
                    Ok(())
                }),
                Variant::checked("naive i-k-j", move |c| {
                    gemm::dot_naive_ikj(n_by_m, m_by_p, c);
                    Ok(())
                }),
            ],
        },
        Scenario::Kronecker => Plan {
            shape: (1, n * m),
            baseline: Box::new(move |c: &mut Matrix| baseline::kronecker(n_vec, m_vec, c.as_mut_slice())),
            headline: Variant::timed("block writes", move |c| {
                products::kronecker_into(n_vec, m_vec, c.as_mut_slice());
                Ok(())
            }),
            others: vec![Variant::timed("indexed", move |c| {
                products::kronecker_indexed(n_vec, m_vec, c.as_mut_slice());
                Ok(())
            })],
        },
    }
}

/// Benchmark runner writing its progress lines to `out`.
pub struct Driver<W: Write> {
    config: BenchConfig,
    out: W,
}

impl<W: Write> Driver<W> {
    pub fn new(config: BenchConfig, out: W) -> Self {
        Self { config, out }
    }

    /// Give back the progress writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Run every configured scenario at every size.
    ///
    /// Stops at the first error; nothing is returned for a partial run.
    pub fn run(&mut self) -> Result<Report, BenchError> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut report = Report::new();
        let scenarios = self.config.scenarios.clone();

        for size in self.config.schedule() {
            info!(n = size.n, m = size.m, p = size.p, trials = size.trials, "generating inputs");
            let inputs = Inputs::generate(size, &mut rng);

            for &scenario in &scenarios {
                let row = self.execute(scenario, plan(scenario, &inputs), size)?;
                info!(
                    %scenario,
                    n = size.n,
                    baseline_ms = millis(row.baseline) as u64,
                    proposed_ms = millis(row.proposed) as u64,
                    multiplier = row.multiplier().unwrap_or(f64::NAN),
                    "scenario finished"
                );
                report.push(scenario, row);
            }
        }

        Ok(report)
    }

    fn execute(&mut self, scenario: Scenario, plan: Plan<'_>, size: ProblemSize) -> Result<Row, BenchError> {
        let Plan {
            shape,
            mut baseline,
            mut headline,
            mut others,
        } = plan;
        let runs = if scenario.is_cubic() {
            self.config.matrix_warmup_runs
        } else {
            self.config.warmup_runs
        }
        .max(1);

        let mut expected = Matrix::zeros(shape.0, shape.1);
        warm_up(runs, || baseline(&mut expected))?;

        let mut out = Matrix::zeros(shape.0, shape.1);
        for variant in std::iter::once(&mut headline).chain(others.iter_mut()) {
            out.clear();
            warm_up(runs, || (variant.kernel)(&mut out))?;
            ensure_close(scenario, variant.label, expected.as_slice(), out.as_slice())?;
        }

        self.banner(&format!("{} (N={})", scenario.label(), size.n))?;

        let baseline_time = time_trials(size.trials, || baseline(&mut out))?;
        writeln!(self.out, "*** Baseline *** {}ms", millis(baseline_time))?;
        writeln!(self.out)?;

        let proposed = self.time_variant(&mut headline, &mut out, size.trials)?;
        for variant in others.iter_mut().filter(|v| v.timed) {
            self.time_variant(variant, &mut out, size.trials)?;
        }
        writeln!(self.out)?;

        Ok(Row {
            size: size.n,
            trials: size.trials,
            baseline: baseline_time,
            proposed,
        })
    }

    fn time_variant(&mut self, variant: &mut Variant<'_>, out: &mut Matrix, trials: usize) -> Result<Duration, BenchError> {
        let elapsed = time_trials(trials, || (variant.kernel)(&mut *out))?;
        debug!(variant = variant.label, trials, elapsed_ms = millis(elapsed) as u64, "timed variant");
        writeln!(self.out, "{:<40}{:>10}ms", variant.label, millis(elapsed))?;
        Ok(elapsed)
    }

    fn banner(&mut self, label: &str) -> io::Result<()> {
        let line = "=".repeat(50);
        writeln!(self.out, "{}", line)?;
        writeln!(self.out, "{}", label)?;
        writeln!(self.out, "{}", line)
    }
}
