//! Test harness for sift integration tests

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

pub use sift::test_utils::TestTree;

/// Run the sift binary on `dir` with extra arguments.
/// Returns (stdout, stderr, exit code).
pub fn run_sift(dir: &Path, args: &[&str]) -> (String, String, i32) {
    let binary = env!("CARGO_BIN_EXE_sift");
    let output = Command::new(binary)
        .arg(dir)
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run sift");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// The tree from the end-to-end scenario: `a.txt` (10 bytes), `b.log`
/// (2048 bytes, contains ERROR) and `c/d.txt` (5 bytes).
pub fn sample_tree() -> TestTree {
    let tree = TestTree::new();
    tree.add_file("a.txt", "0123456789");
    tree.add_file("b.log", &format!("{}ERROR", "x".repeat(2043)));
    tree.add_file("c/d.txt", "12345");
    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_sample_tree_sizes() {
        let tree = sample_tree();
        assert_eq!(std::fs::metadata(tree.path().join("b.log")).unwrap().len(), 2048);
    }
}
