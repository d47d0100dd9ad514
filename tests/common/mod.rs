use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub base: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let base = tmp.path().join("project");
        fs::create_dir_all(&base).expect("create isolated base dir");
        Self { _tmp: tmp, base }
    }

    /// Seed `data/raw/<key>` with fixture files, `(extension, count)` per
    /// bucket; an empty extension seeds extensionless files.
    pub fn seed_dataset(&self, key: &str, files: &[(&str, usize)]) {
        let dir = self.base.join("data").join("raw").join(key);
        fs::create_dir_all(&dir).expect("create dataset dir");
        for (ext, count) in files {
            for i in 0..*count {
                let name = if ext.is_empty() {
                    format!("file{i}")
                } else {
                    format!("file{i}{ext}")
                };
                fs::write(dir.join(name), b"x").expect("write fixture file");
            }
        }
    }

    pub fn write_metadata(&self, key: &str, body: &str) {
        let dir = self.base.join("data").join("metadata");
        fs::create_dir_all(&dir).expect("create metadata dir");
        fs::write(dir.join(format!("{key}_metadata.json")), body)
            .expect("write metadata file");
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("dsverify").expect("binary under test");
        cmd.arg("--base-dir").arg(&self.base);
        cmd
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
