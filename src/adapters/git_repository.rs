use std::path::{Path, PathBuf};

use git2::Repository;

use crate::domain::AppError;
use crate::ports::GitPort;

/// `git2`-backed access to the repository containing a directory.
pub struct GitRepositoryAdapter {
    repo: Repository,
}

impl std::fmt::Debug for GitRepositoryAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRepositoryAdapter").field("path", &self.repo.path()).finish()
    }
}

impl GitRepositoryAdapter {
    /// Open the repository containing `start`, searching parent directories.
    pub fn discover(start: &Path) -> Result<Self, AppError> {
        let repo = Repository::discover(start).map_err(|e| AppError::GitError {
            command: "git2::Repository::discover".to_string(),
            details: e.to_string(),
        })?;
        Ok(Self { repo })
    }
}

impl GitPort for GitRepositoryAdapter {
    fn workdir(&self) -> Result<PathBuf, AppError> {
        self.repo.workdir().map(Path::to_path_buf).ok_or_else(|| AppError::GitError {
            command: "git2::Repository::workdir".to_string(),
            details: "repository is bare".to_string(),
        })
    }

    fn get_current_branch(&self) -> Result<String, AppError> {
        match self.repo.head() {
            Ok(head) => {
                if !head.is_branch() {
                    return Err(AppError::GitError {
                        command: "git2::Repository::head".to_string(),
                        details: "HEAD is detached".to_string(),
                    });
                }
                let shorthand = head.shorthand().ok_or_else(|| AppError::GitError {
                    command: "git2::Reference::shorthand".to_string(),
                    details: "HEAD has no shorthand".to_string(),
                })?;
                Ok(shorthand.to_string())
            }
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => {
                let head_ref = self.repo.find_reference("HEAD").map_err(|e| AppError::GitError {
                    command: "git2::Repository::find_reference(HEAD)".to_string(),
                    details: e.to_string(),
                })?;

                match head_ref.symbolic_target() {
                    Some(target) => {
                        Ok(target.strip_prefix("refs/heads/").unwrap_or(target).to_string())
                    }
                    None => Err(AppError::GitError {
                        command: "get_current_branch".to_string(),
                        details: "HEAD is detached and unborn".to_string(),
                    }),
                }
            }
            Err(e) => Err(AppError::GitError {
                command: "git2::Repository::head".to_string(),
                details: e.to_string(),
            }),
        }
    }

    fn remote_url(&self, remote: &str) -> Result<String, AppError> {
        let found = self.repo.find_remote(remote).map_err(|e| AppError::GitError {
            command: format!("git2::Repository::find_remote({})", remote),
            details: e.to_string(),
        })?;
        found.url().map(str::to_string).ok_or_else(|| AppError::GitError {
            command: format!("git2::Remote::url({})", remote),
            details: "remote URL is not valid UTF-8".to_string(),
        })
    }
}
