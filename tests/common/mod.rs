use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let work = tmp.path().join("work");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&work).expect("create work dir");

        Self {
            _tmp: tmp,
            home,
            work,
        }
    }

    #[allow(dead_code)]
    pub fn profile_path(&self) -> PathBuf {
        self.home.join(".config/powerest/profile.toml")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("powerest");
        cmd.env("HOME", &self.home)
            .env_remove("POWEREST_PROFILE")
            .env_remove("POWEREST_LOG")
            .current_dir(&self.work);
        cmd
    }

    #[allow(dead_code)]
    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    #[allow(dead_code)]
    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("error json output")
    }
}

#[allow(dead_code)]
pub fn approx(v: &Value, expected: f64) -> bool {
    v.as_f64()
        .map(|x| (x - expected).abs() < 1e-6 * expected.abs().max(1.0))
        .unwrap_or(false)
}
