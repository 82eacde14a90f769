use std::path::PathBuf;

use crate::domain::AppError;

pub trait GitPort {
    /// Working tree root of the repository.
    fn workdir(&self) -> Result<PathBuf, AppError>;

    /// Get the current branch name.
    fn get_current_branch(&self) -> Result<String, AppError>;

    /// URL configured for a remote.
    fn remote_url(&self, remote: &str) -> Result<String, AppError>;
}
