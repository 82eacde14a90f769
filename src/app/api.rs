//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution against the real filesystem, git checkout, and GitHub.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::adapters::gh_token::resolve_token;
use crate::adapters::{FilesystemWorkflowFiles, GitRepositoryAdapter, HttpGitHubClient};
use crate::app::AppContext;
use crate::app::commands::{branches, dispatch};
use crate::app::config::load_config;
use crate::domain::{AppError, Branch, CatalogEntry, DispatchConfig, DispatchIntent};
use crate::ports::GitPort;

pub type LocalContext = AppContext<FilesystemWorkflowFiles, GitRepositoryAdapter>;

/// Create a context for the current directory.
pub fn open() -> Result<LocalContext, AppError> {
    open_at(std::env::current_dir()?)
}

/// Create a context for `path`.
///
/// Inside a git checkout, paths resolve against the working tree root;
/// elsewhere they resolve against `path` itself.
pub fn open_at(path: impl Into<PathBuf>) -> Result<LocalContext, AppError> {
    let path = path.into();

    let git = match GitRepositoryAdapter::discover(&path) {
        Ok(git) => Some(git),
        Err(err) => {
            debug!(error = %err, "not inside a git repository");
            None
        }
    };
    let root = match git.as_ref().map(GitPort::workdir) {
        Some(Ok(workdir)) => workdir,
        _ => path,
    };

    let files = FilesystemWorkflowFiles::new(root);
    let config = load_config(&files)?;
    Ok(AppContext::new(files, git, config))
}

/// Build an authenticated GitHub client from the environment.
pub fn connect(config: &DispatchConfig) -> Result<HttpGitHubClient, AppError> {
    let token = resolve_token()?;
    HttpGitHubClient::new(token, &config.api)
}

/// List manually dispatchable workflows of the current checkout.
pub fn list_workflows(dir: Option<&Path>) -> Result<Vec<CatalogEntry>, AppError> {
    open()?.catalog(dir)
}

/// List remote branches of the current repository.
pub fn list_branches(repo: Option<&str>) -> Result<Vec<Branch>, AppError> {
    let ctx = open()?;
    let repository = ctx.repository(repo)?;
    let client = connect(ctx.config())?;
    branches::fetch_branches(&client, &repository.owner, &repository.name)
}

/// Dispatch a workflow run.
pub fn dispatch(intent: &DispatchIntent) -> Result<(), AppError> {
    let ctx = open()?;
    let client = connect(ctx.config())?;
    dispatch::run(&client, intent)
}
