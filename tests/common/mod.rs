//! Common test utilities for branch-diff integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Base URL nothing listens on, so an unexpected download fails fast
pub const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:9/";

/// A temporary cache directory pre-populated with branch exports
pub struct TestCache {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestCache {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a cached export for `branch`
    pub fn write_branch(&self, branch: &str, body: &str) {
        std::fs::write(self.path.join(format!("{branch}.json")), body)
            .expect("Failed to write cache file");
    }

    #[allow(dead_code)]
    pub fn read_branch(&self, branch: &str) -> String {
        std::fs::read_to_string(self.path.join(format!("{branch}.json")))
            .expect("Failed to read cache file")
    }
}

/// Build an export document from `(arch, name, epoch, version, release)` tuples
pub fn export(packages: &[(&str, &str, u64, &str, &str)]) -> String {
    let packages: Vec<serde_json::Value> = packages
        .iter()
        .map(|(arch, name, epoch, version, release)| {
            serde_json::json!({
                "name": name,
                "epoch": epoch,
                "version": version,
                "release": release,
                "arch": arch,
                "disttag": "",
                "buildtime": 0,
                "source": name,
            })
        })
        .collect();

    serde_json::json!({
        "request_args": {},
        "length": packages.len(),
        "packages": packages,
    })
    .to_string()
}

/// branch-diff command reading from `cache_dir` with the network disabled
#[allow(deprecated)]
pub fn branch_diff_cmd(cache_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("branch-diff").expect("binary should build");
    cmd.env_remove("RUST_LOG")
        .env_remove("BRANCH_DIFF_STABLE")
        .env_remove("BRANCH_DIFF_DEV")
        .env("BRANCH_DIFF_CACHE_DIR", cache_dir)
        .env("BRANCH_DIFF_BASE_URL", UNREACHABLE_BASE_URL);
    cmd
}
