//! Integration tests for the pursuit binary.
//!
//! Writes a small data directory, runs the binary against it, and checks the
//! summary, JSON output and exit status.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

/// Board: 7 usable positions; game: evader plus two pursuers.
fn write_fixture(root: &Path) {
    let files = [
        ("board-data", "num_of_positions.txt", "7\n"),
        ("board-data", "num_of_taxi_connections.txt", "4\n"),
        ("board-data", "taxi_map.txt", "1 2\n2 1\n2 3\n3 2\n"),
        ("board-data", "num_of_bus_connections.txt", "2\n"),
        ("board-data", "bus_map.txt", "1 4\n4 1\n"),
        ("board-data", "num_of_underground_connections.txt", "1\n"),
        ("board-data", "underground_map.txt", "1 7\n"),
        ("board-data", "num_of_ferry_connections.txt", "1\n"),
        ("board-data", "ferry_map.txt", "6 7\n"),
        ("board-data", "num_of_general_starting_positions.txt", "5\n"),
        ("board-data", "general_starting_positions.txt", "1\n2\n4\n6\n7\n"),
        ("game-data", "num_of_players.txt", "3\n"),
        ("game-data", "mr_x_starting_position.txt", "6\n"),
        ("game-data", "mr_x_tickets.txt", "4\n3\n3\n5\n2\n"),
        ("game-data", "detective_tickets.txt", "10\n8\n4\n0\n0\n"),
        ("game-data", "detectives_starting_positions.txt", "2\n4\n"),
    ];
    for (dir, name, contents) in files {
        let dir = root.join(dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), contents).unwrap();
    }
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pursuit"))
        .args(args)
        .output()
        .expect("failed to start pursuit")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn full_summary() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let output = run(&["--data-root", dir.path().to_str().unwrap()]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let lines = stdout_lines(&output);
    assert!(lines.iter().any(|l| l == "positions 8"));
    assert!(lines.iter().any(|l| l == "edges 8"));
    assert!(lines.iter().any(|l| l == "edges short_range 4"));
    assert!(lines.iter().any(|l| l == "edges wildcard 1"));
    assert!(lines.iter().any(|l| l.starts_with("evader at 6 ")));
    assert!(lines.iter().any(|l| l.starts_with("pursuer 2 at 4 ")));
    assert!(lines.iter().any(|l| l == "estimate positions 3: 1 6 7"));
}

#[test]
fn pursuers_view_has_no_evader() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let output = run(&["--data-root", dir.path().to_str().unwrap(), "--mode", "pursuers"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert!(!lines.iter().any(|l| l.starts_with("evader")));
    assert!(lines.iter().any(|l| l.starts_with("estimate positions")));
}

#[test]
fn evader_view_has_no_estimate() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let output = run(&["--data-root", dir.path().to_str().unwrap(), "--mode", "evader"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert!(lines.iter().any(|l| l.starts_with("evader at 6")));
    assert!(!lines.iter().any(|l| l.starts_with("estimate")));
}

#[test]
fn json_output() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let output = run(&["--data-root", dir.path().to_str().unwrap(), "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["board"]["positions_count"], 8);
    assert_eq!(value["evader"]["position"], 6);
    assert_eq!(value["pursuers"].as_array().unwrap().len(), 2);
    assert_eq!(value["pursuers"][0]["tickets"]["short_range"], 10);
    assert_eq!(value["estimate"]["positions"], serde_json::json!([1, 6, 7]));
    assert_eq!(value["board"]["slots"][6][0]["kind"], "wildcard");
}

#[test]
fn layout_file_renames_inputs() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    fs::rename(
        dir.path().join("board-data/ferry_map.txt"),
        dir.path().join("board-data/black_map.txt"),
    )
    .unwrap();
    let layout = dir.path().join("layout.json");
    fs::write(&layout, r#"{"board": {"wildcard": {"count": "num_of_ferry_connections.txt", "map": "black_map.txt"}}}"#).unwrap();

    let output = run(&[
        "--data-root",
        dir.path().to_str().unwrap(),
        "--layout",
        layout.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout_lines(&output).iter().any(|l| l == "edges wildcard 1"));
}

#[test]
fn bad_data_fails_with_location() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    fs::write(dir.path().join("board-data/bus_map.txt"), "1 4\n4 99\n").unwrap();

    let output = run(&["--data-root", dir.path().to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bus_map.txt:2"), "{stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn failure_is_reported_once_even_with_logging_on() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    fs::write(dir.path().join("board-data/bus_map.txt"), "1 4\n4 99\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_pursuit"))
        .args(["--data-root", dir.path().to_str().unwrap()])
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to start pursuit");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("bus_map.txt:2").count(), 1, "{stderr}");
}

#[test]
fn invalid_utf8_line_fails_with_location() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    fs::write(dir.path().join("board-data/taxi_map.txt"), b"1 2\n\xff 1\n2 3\n3 2\n").unwrap();

    let output = run(&["--data-root", dir.path().to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("taxi_map.txt:2"), "{stderr}");
    assert!(!stderr.contains("could not open"), "{stderr}");
}

#[test]
fn missing_data_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&["--data-root", dir.path().to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("could not open"));
}

#[test]
fn unknown_mode_rejected() {
    let output = run(&["--mode", "detectives"]);
    assert!(!output.status.success());
}
