use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::Output;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let dir = tmp.path().to_path_buf();
        Self { _tmp: tmp, dir }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("fintel").unwrap();
        cmd.current_dir(&self.dir);
        cmd
    }

    pub fn write_record(&self, name: &str, record: &Value) -> PathBuf {
        let path = self.dir.join(name);
        fs::write(&path, serde_json::to_string_pretty(record).unwrap()).expect("write record");
        path
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

/// Runs a render invocation. Returns `None` when the host has no usable
/// font family for the PDF backend, the only environment-dependent failure;
/// anything else fails the test.
pub fn try_render(cmd: &mut Command) -> Option<Output> {
    let out = cmd.output().expect("spawn fintel");
    if out.status.success() {
        return Some(out);
    }
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("font"), "unexpected failure: {err}");
    None
}
