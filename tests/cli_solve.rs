//! Runs the `solve` subcommand as a child process.

use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;

fn payload_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("payloads")
        .join(name)
}

fn solve(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_production-plan"))
        .arg("solve")
        .args(args)
        .env_remove("PRODUCTION_PLAN_CONFIG")
        .output()
        .expect("production-plan process should run")
}

#[test]
fn solve_prints_expected_plan() {
    let payload = payload_path("payload3.json");
    let output = solve(&[payload.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let plan: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let expected: Value =
        serde_json::from_str(include_str!("../payloads/response3.json")).unwrap();
    assert_eq!(plan, expected);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Plan Summary"));
}

#[test]
fn solve_writes_csv() {
    let payload = payload_path("payload3.json");
    let csv_path = std::env::temp_dir().join(format!("production-plan-{}.csv", std::process::id()));
    let output = solve(&[
        payload.to_str().unwrap(),
        "--csv-out",
        csv_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let csv = std::fs::read_to_string(&csv_path).expect("CSV should be written");
    let _ = std::fs::remove_file(&csv_path);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "name,p");
    assert_eq!(lines[4], "gasfiredbig2,338.4");
}

#[test]
fn solve_fails_on_missing_file() {
    let output = solve(&["/nonexistent/payload.json"]);
    assert!(!output.status.success());
}
