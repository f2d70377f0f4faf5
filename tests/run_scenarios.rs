use std::fs;
use std::path::{Path, PathBuf};

use grid_stats::GridStatsError;
use grid_stats::app::{RunConfig, run};
use grid_stats::grid::Mode;
use grid_stats::report::OutputFormat;
use tempfile::TempDir;

fn setup(input: &[u8]) -> (TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let input_path = dir.path().join("input.txt");
    fs::write(&input_path, input).expect("write input");
    let output_path = dir.path().join("output.txt");
    (dir, input_path, output_path)
}

fn config(mode: Mode, input: &Path, output: &Path) -> RunConfig {
    RunConfig {
        mode,
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        format: OutputFormat::Text,
    }
}

fn run_both(input: &[u8]) -> [String; 2] {
    [Mode::Bounded, Mode::Dynamic].map(|mode| {
        let (_dir, input_path, output_path) = setup(input);
        run(&config(mode, &input_path, &output_path)).expect("run");
        fs::read_to_string(&output_path).expect("read output")
    })
}

#[test]
fn two_by_two_scenario() {
    assert_eq!(run_both(b"2 2\n1 2\n1 3\n"), ["1\n0\n", "1\n0\n"]);
}

#[test]
fn center_peak_scenario() {
    assert_eq!(
        run_both(b"3 3\n1 1 1\n1 5 1\n1 1 1\n"),
        ["1\n1\n", "1\n1\n"]
    );
}

#[test]
fn zero_by_zero_ignores_trailing_content() {
    assert_eq!(run_both(b"0 0\nthis is not a matrix \xff\xfe"), ["0\n0\n", "0\n0\n"]);
}

#[test]
fn zero_rows_override_column_count() {
    assert_eq!(run_both(b"0 5"), ["0\n0\n", "0\n0\n"]);
}

#[test]
fn zero_dimension_skips_capacity_check() {
    let (_dir, input_path, output_path) = setup(b"0 20000");
    run(&config(Mode::Bounded, &input_path, &output_path)).expect("run");
    assert_eq!(fs::read_to_string(&output_path).expect("read"), "0\n0\n");
}

#[test]
fn single_row_counts_every_column() {
    assert_eq!(run_both(b"1 4\n5 5 5 5"), ["4\n0\n", "4\n0\n"]);
}

#[test]
fn bounded_capacity_exceeded_writes_nothing() {
    let (_dir, input_path, output_path) = setup(b"1 10001\n");
    let err = run(&config(Mode::Bounded, &input_path, &output_path)).unwrap_err();
    assert!(matches!(
        err,
        GridStatsError::CapacityExceeded {
            requested: 10_001,
            capacity: 10_000
        }
    ));
    assert_eq!(err.exit_code(), 2);
    assert!(!output_path.exists());
}

#[test]
fn dynamic_mode_has_no_fixed_ceiling() {
    let mut input = String::from("1 10001\n");
    for i in 0..10_001 {
        input.push_str(&format!("{i} "));
    }
    let (_dir, input_path, output_path) = setup(input.as_bytes());
    let stats = run(&config(Mode::Dynamic, &input_path, &output_path)).expect("run");
    assert_eq!(stats.columns, 10_001);
    assert_eq!(stats.local_maxima, 0);
}

#[test]
fn truncated_elements_write_nothing() {
    for mode in [Mode::Bounded, Mode::Dynamic] {
        let (_dir, input_path, output_path) = setup(b"2 2\n1 2 3");
        let err = run(&config(mode, &input_path, &output_path)).unwrap_err();
        assert!(matches!(err, GridStatsError::ElementParse { index: 3, .. }));
        assert_eq!(err.exit_code(), 2);
        assert!(!output_path.exists());
    }
}

#[test]
fn malformed_header_is_a_data_error() {
    let (_dir, input_path, output_path) = setup(b"two 2\n");
    let err = run(&config(Mode::Dynamic, &input_path, &output_path)).unwrap_err();
    assert!(matches!(err, GridStatsError::DimensionParse(_)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn missing_input_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = run(&config(
        Mode::Bounded,
        &dir.path().join("absent.txt"),
        &dir.path().join("out.txt"),
    ))
    .unwrap_err();
    assert!(matches!(err, GridStatsError::InputOpen { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn unwritable_output_is_exit_one() {
    let (dir, input_path, _) = setup(b"1 1\n7");
    let output_path = dir.path().join("missing").join("out.txt");
    let err = run(&config(Mode::Dynamic, &input_path, &output_path)).unwrap_err();
    assert!(matches!(err, GridStatsError::OutputOpen { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn json_format_writes_named_fields() {
    let (_dir, input_path, output_path) = setup(b"3 3\n1 1 1\n1 5 1\n1 1 1\n");
    let mut cfg = config(Mode::Bounded, &input_path, &output_path);
    cfg.format = OutputFormat::Json;
    run(&cfg).expect("run");
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output_path).expect("read")).expect("json");
    assert_eq!(written["columns"], 1);
    assert_eq!(written["local_maxima"], 1);
}
