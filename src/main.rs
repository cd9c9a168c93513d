//! Benchmark runner for the kernel variants.
//!
//! With no flags it runs every scenario over ten doubling sizes starting at
//! 8, printing progress to stdout and writing the summary tables to
//! `Benchmarking.txt`.
//!
//! ```bash
//! # The full run (takes a long while)
//! linalg-bench
//!
//! # Small non-square schedule, seconds instead of hours
//! linalg-bench --quick
//!
//! # Only the matrix-vector families, with debug logs
//! RUST_LOG=debug linalg-bench --quick --scenario matrix-vector --scenario vector-matrix
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use linalg_bench::harness::{BenchConfig, Driver, Scenario};

/// Time hand-written dense kernels against ndarray
#[derive(Parser, Debug)]
#[command(name = "linalg-bench")]
#[command(version)]
struct Args {
    /// Size of the first step; doubles every step
    #[arg(long)]
    start_size: Option<usize>,

    /// Number of sizes to run
    #[arg(long)]
    steps: Option<usize>,

    /// Trials at the first size; quartered every step
    #[arg(long)]
    trials: Option<usize>,

    /// Warm-up runs per variant for the vector scenarios
    #[arg(long)]
    warmup: Option<usize>,

    /// Seed for the random inputs
    #[arg(long)]
    seed: Option<u64>,

    /// Short non-square schedule (7x8 with 9-wide products, 50 trials, 3 steps)
    #[arg(long)]
    quick: bool,

    /// Only run this scenario (repeatable)
    #[arg(long = "scenario", value_enum)]
    scenarios: Vec<Scenario>,

    /// Report path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> BenchConfig {
        let mut config = if self.quick {
            BenchConfig::quick()
        } else {
            BenchConfig::default()
        };

        if let Some(n) = self.start_size {
            config.start_size = n;
        }
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if let Some(trials) = self.trials {
            config.trials = trials;
        }
        if let Some(runs) = self.warmup {
            config.warmup_runs = runs;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(path) = self.output {
            config.output = path;
        }
        if !self.scenarios.is_empty() {
            // keep run order, drop repeats
            config.scenarios = Scenario::ALL
                .into_iter()
                .filter(|s| self.scenarios.contains(s))
                .collect();
        }
        config
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Args::parse().into_config();
    tracing::info!(
        start_size = config.start_size,
        steps = config.steps,
        trials = config.trials,
        seed = config.seed,
        scenarios = config.scenarios.len(),
        "starting benchmark"
    );

    let output = config.output.clone();
    let mut driver = Driver::new(config, io::stdout().lock());
    let report = driver.run().context("benchmark run failed")?;

    report
        .write_to(&output)
        .with_context(|| format!("failed to write report to {}", output.display()))?;
    tracing::info!("Report written to {}", output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_is_the_default_config() {
        let config = Args::parse_from(["linalg-bench"]).into_config();
        let default = BenchConfig::default();
        assert_eq!(config.schedule(), default.schedule());
        assert_eq!(config.scenarios, default.scenarios);
        assert_eq!(config.output, default.output);
    }

    #[test]
    fn flags_override_quick_schedule() {
        let config = Args::parse_from(["linalg-bench", "--quick", "--steps", "1", "--trials", "4", "-o", "out.txt"])
            .into_config();
        let schedule = config.schedule();
        assert_eq!(schedule.len(), 1);
        assert_eq!((schedule[0].n, schedule[0].m, schedule[0].p, schedule[0].trials), (7, 8, 9, 4));
        assert_eq!(config.output, PathBuf::from("out.txt"));
    }

    #[test]
    fn scenario_filter_keeps_run_order_and_drops_repeats() {
        let config = Args::parse_from([
            "linalg-bench",
            "--scenario",
            "kronecker",
            "--scenario",
            "outer",
            "--scenario",
            "kronecker",
        ])
        .into_config();
        assert_eq!(config.scenarios, vec![Scenario::Outer, Scenario::Kronecker]);
    }
}
