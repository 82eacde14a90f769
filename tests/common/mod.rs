//! Shared testing utilities for gh-dispatch CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory with its own `$HOME`.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    pub fn home(&self) -> &Path {
        self.root.path()
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled binary, detached from the caller's GitHub settings.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("gh-dispatch").expect("Failed to locate gh-dispatch binary");
        cmd.current_dir(self.work_dir())
            .env("HOME", self.home())
            .env_remove("GH_REPO")
            .env_remove("GH_TOKEN")
            .env_remove("GITHUB_TOKEN")
            .env_remove("GH_DISPATCH_API_URL")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write a workflow file under `.github/workflows`.
    pub fn write_workflow(&self, file_name: &str, content: &str) {
        let dir = self.work_dir.join(".github").join("workflows");
        fs::create_dir_all(&dir).expect("Failed to create workflows directory");
        fs::write(dir.join(file_name), content).expect("Failed to write workflow");
    }

    pub fn write_config(&self, content: &str) {
        let dir = self.work_dir.join(".github");
        fs::create_dir_all(&dir).expect("Failed to create .github directory");
        fs::write(dir.join("gh-dispatch.toml"), content).expect("Failed to write config");
    }
}

pub const DEPLOY_WORKFLOW: &str = r#"name: Deploy
on:
  workflow_dispatch:
    inputs:
      environment:
        description: Target environment
        required: true
        type: choice
        options: [staging, production]
        default: staging
      dry_run:
        type: boolean
        default: "false"
jobs: {}
"#;

pub const CI_WORKFLOW: &str = "name: CI\non: [push, pull_request]\njobs: {}\n";
