use std::path::{Path, PathBuf};

use tracing::debug;

use crate::app::commands::catalog;
use crate::app::config::detect_repository;
use crate::domain::{AppError, CatalogEntry, DispatchConfig, RepositoryId};
use crate::ports::{GitPort, WorkflowFiles};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: WorkflowFiles, G: GitPort> {
    files: F,
    git: Option<G>,
    config: DispatchConfig,
}

impl<F: WorkflowFiles, G: GitPort> AppContext<F, G> {
    /// Create a new application context.
    pub fn new(files: F, git: Option<G>, config: DispatchConfig) -> Self {
        Self { files, git, config }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Workflow directory to scan: the override when given, else the configured one.
    pub fn workflows_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        override_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(&self.config.workflows.dir))
    }

    /// Scan the workflow directory for manually dispatchable workflows.
    pub fn catalog(&self, override_dir: Option<&Path>) -> Result<Vec<CatalogEntry>, AppError> {
        catalog::scan(&self.files, &self.workflows_dir(override_dir))
    }

    /// Current branch of the checkout, if it can be determined.
    pub fn current_branch(&self) -> Option<String> {
        let git = self.git.as_ref()?;
        match git.get_current_branch() {
            Ok(branch) => Some(branch),
            Err(err) => {
                debug!(error = %err, "current branch unavailable");
                None
            }
        }
    }

    pub fn repository(&self, explicit: Option<&str>) -> Result<RepositoryId, AppError> {
        detect_repository(explicit, self.git.as_ref())
    }
}
