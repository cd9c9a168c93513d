use std::path::PathBuf;

use super::scenario::Scenario;

/// Problem shape and repetition count for one step of the size schedule.
///
/// Scenarios pick the dimensions they need: `n` rows by `m` columns for the
/// matrix-vector family, `m`×`p` for the right operand of the products.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemSize {
    pub n: usize,
    pub m: usize,
    pub p: usize,
    pub trials: usize,
}

/// Everything the driver needs to know about a run.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// `n` at the first step; doubles every step.
    pub start_size: usize,
    /// Extra columns (`m = n + dm`) and extra product width (`p = n + dp`)
    /// applied to the first step only.
    pub first_step_skew: (usize, usize),
    pub steps: usize,
    /// Trials at the first step; divided by four every step.
    pub trials: usize,
    pub warmup_runs: usize,
    /// Warm-up runs for the matrix-matrix scenarios, which are far heavier.
    pub matrix_warmup_runs: usize,
    pub seed: u64,
    /// Scenarios to run, in this order.
    pub scenarios: Vec<Scenario>,
    pub output: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            start_size: 8,
            first_step_skew: (0, 0),
            steps: 10,
            trials: 1 << 22,
            warmup_runs: 10,
            matrix_warmup_runs: 2,
            seed: 0x5eed_1a1b,
            scenarios: Scenario::ALL.to_vec(),
            output: PathBuf::from("Benchmarking.txt"),
        }
    }
}

impl BenchConfig {
    /// Small, non-square schedule that finishes in seconds.
    ///
    /// The first step is 7×8 with 9-wide products so that no dimension is a
    /// multiple of an unroll factor.
    pub fn quick() -> Self {
        Self {
            start_size: 7,
            first_step_skew: (1, 2),
            steps: 3,
            trials: 50,
            ..Self::default()
        }
    }

    /// The size schedule: `n` doubles and the trial count quarters per step,
    /// never dropping below one trial.
    pub fn schedule(&self) -> Vec<ProblemSize> {
        let (dm, dp) = self.first_step_skew;
        (0..self.steps)
            .map(|step| {
                let n = self.start_size << step;
                let (m, p) = if step == 0 { (n + dm, n + dp) } else { (n, n) };
                let trials = self.trials.checked_shr(2 * step as u32).unwrap_or(0).max(1);
                ProblemSize { n, m, p, trials }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_doubles_sizes_and_quarters_trials() {
        let sched = BenchConfig::default().schedule();
        assert_eq!(sched.len(), 10);
        assert_eq!(sched[0], ProblemSize { n: 8, m: 8, p: 8, trials: 1 << 22 });
        assert_eq!(sched[1].n, 16);
        assert_eq!(sched[1].trials, 1 << 20);
        assert_eq!(sched[9].n, 4096);
        assert_eq!(sched[9].trials, 16);
    }

    #[test]
    fn quick_schedule_is_skewed_only_at_first_step() {
        let sched = BenchConfig::quick().schedule();
        assert_eq!(sched[0], ProblemSize { n: 7, m: 8, p: 9, trials: 50 });
        assert_eq!(sched[1], ProblemSize { n: 14, m: 14, p: 14, trials: 12 });
        assert_eq!(sched[2].trials, 3);
    }

    #[test]
    fn trials_never_reach_zero() {
        let cfg = BenchConfig {
            trials: 5,
            steps: 40,
            start_size: 1,
            ..BenchConfig::default()
        };
        assert!(cfg.schedule().iter().all(|s| s.trials == 1 || s.trials == 5));
    }
}
