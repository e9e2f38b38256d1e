use predicates::str::contains;
use serde_json::json;

mod common;
use common::{try_render, TestEnv};

#[test]
fn enrich_json_reports_complete_profile() {
    let env = TestEnv::new();
    let out = env.run_json(&["enrich", "IP", "203.0.113.5"]);
    assert_eq!(out["ok"], true);
    let data = &out["data"];
    assert_eq!(data["entity"], "203.0.113.5");
    assert_eq!(data["type"], "IP");
    let risk = data["risk_score"].as_f64().expect("risk score");
    assert!((0.0..1.0).contains(&risk));
    assert!(data["known_affiliations"].is_array());
    assert!(data["leaked_creds"].is_boolean());
    assert!(data["geo_location"].is_string());
}

#[test]
fn enrich_text_row_echoes_entity() {
    let env = TestEnv::new();
    env.cmd()
        .args(["enrich", "WALLET", "bc1qexample"])
        .assert()
        .success()
        .stdout(contains("bc1qexample"))
        .stdout(contains("WALLET"));
}

#[test]
fn render_missing_input_file_reports_path() {
    let env = TestEnv::new();
    env.cmd()
        .args(["render", "nao_existe.json"])
        .assert()
        .failure()
        .stderr(contains("nao_existe.json"));
}

#[test]
fn render_malformed_evidence_reports_index_and_field() {
    let env = TestEnv::new();
    let record = env.write_record(
        "caso.json",
        &json!({
            "operation_id": "OP-3",
            "evidence": [
                {"type": "IP", "description": "1.2.3.4", "timestamp": "T1"},
                {"type": "Transaction", "description": "PIX"}
            ]
        }),
    );
    env.cmd()
        .args(["render", record.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("evidence item 1"))
        .stderr(contains("timestamp"));
    assert!(!env.dir.join("relatorio_confidencial.pdf").exists());
}

#[test]
fn render_reports_destination_on_success() {
    let env = TestEnv::new();
    let record = env.write_record("caso.json", &json!({"operation_id": "OP-4"}));
    let mut cmd = env.cmd();
    cmd.args(["render", record.to_str().unwrap(), "--out", "saida.pdf"]);
    if let Some(out) = try_render(&mut cmd) {
        let stdout = String::from_utf8_lossy(&out.stdout);
        assert!(stdout.contains("PDF generated: saida.pdf"), "got: {stdout}");
        assert!(env.dir.join("saida.pdf").exists());
    }
}

#[test]
fn render_record_with_unknown_keys_is_accepted() {
    let env = TestEnv::new();
    let record = env.write_record(
        "caso.json",
        &json!({"operation_id": "OP-5", "case_officer": "ignored"}),
    );
    let mut cmd = env.cmd();
    cmd.args(["render", record.to_str().unwrap()]);
    if let Some(out) = try_render(&mut cmd) {
        assert!(String::from_utf8_lossy(&out.stdout).contains("PDF generated"));
    }
}
