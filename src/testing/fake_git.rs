use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::GitPort;

pub struct FakeGit {
    pub workdir: PathBuf,
    pub current_branch: Option<String>,
    pub origin_url: Option<String>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self {
            workdir: PathBuf::from("/repo"),
            current_branch: Some("main".to_string()),
            origin_url: Some("git@github.com:owner/repo.git".to_string()),
        }
    }

    pub fn with_origin(mut self, url: Option<&str>) -> Self {
        self.origin_url = url.map(str::to_string);
        self
    }

    pub fn with_branch(mut self, branch: Option<&str>) -> Self {
        self.current_branch = branch.map(str::to_string);
        self
    }
}

impl GitPort for FakeGit {
    fn workdir(&self) -> Result<PathBuf, AppError> {
        Ok(self.workdir.clone())
    }

    fn get_current_branch(&self) -> Result<String, AppError> {
        self.current_branch.clone().ok_or_else(|| AppError::GitError {
            command: "get_current_branch".into(),
            details: "HEAD is detached".into(),
        })
    }

    fn remote_url(&self, remote: &str) -> Result<String, AppError> {
        self.origin_url.clone().filter(|_| remote == "origin").ok_or_else(|| AppError::GitError {
            command: format!("remote_url({})", remote),
            details: "remote not found".into(),
        })
    }
}
