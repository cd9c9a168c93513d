use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use super::scenario::Scenario;
use super::timing::millis;

pub const HEADER: &str = "|Size|Trials|Baseline (ms)|Proposed (ms)|Multiplier|";
pub const BANNER: &str = "|----------|:-------------:|------:|------:|------:|";

/// Baseline vs. proposed timing for one problem size.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub size: usize,
    pub trials: usize,
    pub baseline: Duration,
    pub proposed: Duration,
}

impl Row {
    /// `baseline / proposed`, rounded to one decimal with ties to even.
    ///
    /// Computed from the exact durations, not the truncated milliseconds.
    /// `None` when the proposed run took no measurable time.
    pub fn multiplier(&self) -> Option<f64> {
        if self.proposed.is_zero() {
            return None;
        }
        let ratio = self.baseline.as_nanos() as f64 / self.proposed.as_nanos() as f64;
        Some((ratio * 10.0).round_ties_even() / 10.0)
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "|{}|{}|{}|{}|",
            self.size,
            self.trials,
            millis(self.baseline),
            millis(self.proposed)
        )?;
        match self.multiplier() {
            Some(mul) => write!(f, "x{:.1}|", mul),
            None => f.write_str("n/a|"),
        }
    }
}

/// All rows recorded for one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub scenario: Scenario,
    pub rows: Vec<Row>,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.scenario.label())?;
        writeln!(f, "{}", HEADER)?;
        writeln!(f, "{}", BANNER)?;
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// The accumulated tables, one per scenario in the order first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    tables: Vec<Table>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `row` to the table of `scenario`, creating it on first use.
    pub fn push(&mut self, scenario: Scenario, row: Row) {
        match self.tables.iter_mut().find(|t| t.scenario == scenario) {
            Some(table) => table.rows.push(row),
            None => self.tables.push(Table {
                scenario,
                rows: vec![row],
            }),
        }
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn table(&self, scenario: Scenario) -> Option<&Table> {
        self.tables.iter().find(|t| t.scenario == scenario)
    }

    /// Overwrite `path` with the rendered report.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_string())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, table) in self.tables.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", table)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(size: usize, baseline_ms: u64, proposed_ms: u64) -> Row {
        Row {
            size,
            trials: 1 << 22,
            baseline: Duration::from_millis(baseline_ms),
            proposed: Duration::from_millis(proposed_ms),
        }
    }

    #[test]
    fn row_renders_markdown_cells() {
        assert_eq!(row(8, 812, 301).to_string(), "|8|4194304|812|301|x2.7|");
    }

    #[test]
    fn multiplier_uses_exact_durations() {
        let r = Row {
            size: 8,
            trials: 1,
            baseline: Duration::from_micros(1500),
            proposed: Duration::from_micros(500),
        };
        assert_eq!(r.to_string(), "|8|1|1|0|x3.0|");
    }

    #[test]
    fn multiplier_ties_round_to_even() {
        assert_eq!(row(8, 9, 4).multiplier(), Some(2.2));
        assert_eq!(row(8, 9, 4).to_string(), "|8|4194304|9|4|x2.2|");
        assert_eq!(row(8, 15, 4).multiplier(), Some(3.8));
    }

    #[test]
    fn zero_proposed_time_has_no_multiplier() {
        let r = row(8, 5, 0);
        assert_eq!(r.multiplier(), None);
        assert!(r.to_string().ends_with("|n/a|"));
    }

    #[test]
    fn tables_keep_first_seen_order() {
        let mut report = Report::new();
        report.push(Scenario::VectorMatrix, row(8, 10, 5));
        report.push(Scenario::MatrixVector, row(8, 10, 5));
        report.push(Scenario::VectorMatrix, row(16, 10, 5));

        let tables = report.tables();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].scenario, Scenario::VectorMatrix);
        assert_eq!(tables[0].rows.len(), 2);

        let text = report.to_string();
        let expected = format!(
            "### Vector-Matrix\n{HEADER}\n{BANNER}\n|8|4194304|10|5|x2.0|\n|16|4194304|10|5|x2.0|\n\n\
             ### Matrix-Vector\n{HEADER}\n{BANNER}\n|8|4194304|10|5|x2.0|\n"
        );
        assert_eq!(text, expected);
    }
}
