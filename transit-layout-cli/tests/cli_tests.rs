use assert_cmd::Command;
use predicates::prelude::*;

fn sample_graph() -> &'static str {
    r#"{
        "nodes": [
            {"id": "a", "metadata": {"x": 0, "y": 0}},
            {"id": "b", "metadata": {"x": 10, "y": 0}},
            {"id": "c", "metadata": {"x": 20, "y": 0}}
        ],
        "edges": [
            {"source": "a", "target": "b", "metadata": {"lines": ["L1"]}},
            {"source": "b", "target": "c", "metadata": {"lines": ["L1"]}}
        ]
    }"#
}

#[test]
fn debug_flag_prints_lp_formulation_without_solving() {
    let mut cmd = Command::cargo_bin("transit-layout").unwrap();
    cmd.arg("-").arg("--debug").write_stdin(sample_graph());
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Minimize"))
        .stdout(predicate::str::contains("Subject To"))
        .stdout(predicate::str::contains("End"));
}

#[test]
fn missing_input_file_fails_with_context() {
    let mut cmd = Command::cargo_bin("transit-layout").unwrap();
    cmd.arg("/nonexistent/path/to/graph.json");
    cmd.assert().failure();
}

#[test]
fn malformed_json_is_rejected() {
    let mut cmd = Command::cargo_bin("transit-layout").unwrap();
    cmd.arg("-").write_stdin("{ not json");
    cmd.assert().failure();
}
