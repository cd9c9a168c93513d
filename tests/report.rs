use linalg_bench::harness::report::{BANNER, HEADER};
use linalg_bench::harness::{BenchConfig, Driver, Scenario};

fn small_config() -> BenchConfig {
    BenchConfig {
        steps: 2,
        trials: 16,
        warmup_runs: 1,
        matrix_warmup_runs: 1,
        ..BenchConfig::quick()
    }
}

#[test]
fn quick_run_writes_one_table_per_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Benchmarking.txt");

    let mut driver = Driver::new(small_config(), Vec::<u8>::new());
    let report = driver.run().unwrap();
    report.write_to(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    for scenario in Scenario::ALL {
        assert!(text.contains(&format!("### {}\n{}\n{}\n", scenario.label(), HEADER, BANNER)), "{}", scenario);
    }
    assert_eq!(text.matches(HEADER).count(), Scenario::ALL.len());

    // quick schedule: 7 then 14, trials 16 then 4
    let table = report.table(Scenario::MatrixVector).unwrap();
    let cells: Vec<(usize, usize)> = table.rows.iter().map(|r| (r.size, r.trials)).collect();
    assert_eq!(cells, vec![(7, 16), (14, 4)]);
    assert!(text.contains("|7|16|"));
    assert!(text.contains("|14|4|"));
}

#[test]
fn report_overwrites_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Benchmarking.txt");
    std::fs::write(&path, "stale contents from an older run\n").unwrap();

    let config = BenchConfig {
        steps: 1,
        scenarios: vec![Scenario::Outer],
        ..small_config()
    };
    let report = Driver::new(config, Vec::<u8>::new()).run().unwrap();
    report.write_to(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("### Outer\n"));
    assert!(!text.contains("stale"));
}

#[test]
fn progress_lines_go_to_the_writer() {
    let config = BenchConfig {
        steps: 1,
        scenarios: vec![Scenario::VectorMatrix],
        ..small_config()
    };
    let mut driver = Driver::new(config, Vec::<u8>::new());
    driver.run().unwrap();

    let out = String::from_utf8(driver.into_inner()).unwrap();
    assert!(out.contains("Vector-Matrix (N=7)"));
    assert!(out.contains("*** Baseline *** "));
    assert!(out.lines().any(|l| l.starts_with("row walk, unrolled x2") && l.ends_with("ms")));
}
