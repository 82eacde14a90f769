//! Repository identity detection.

use tracing::debug;

use crate::domain::{AppError, RepositoryId};
use crate::ports::GitPort;

/// Environment variable naming the target repository as `OWNER/NAME`.
pub const REPO_ENV: &str = "GH_REPO";

/// Resolve the target repository.
///
/// Order: explicit value, then `GH_REPO`, then the `origin` remote.
pub fn detect_repository(
    explicit: Option<&str>,
    git: Option<&(impl GitPort + ?Sized)>,
) -> Result<RepositoryId, AppError> {
    resolve_repository(explicit, std::env::var(REPO_ENV).ok().as_deref(), git)
}

pub(crate) fn resolve_repository(
    explicit: Option<&str>,
    env_value: Option<&str>,
    git: Option<&(impl GitPort + ?Sized)>,
) -> Result<RepositoryId, AppError> {
    if let Some(value) = explicit {
        return RepositoryId::parse(value);
    }

    if let Some(value) = env_value.filter(|value| !value.trim().is_empty()) {
        return RepositoryId::parse(value);
    }

    let Some(git) = git else {
        return Err(AppError::RepositoryDetectionFailed);
    };
    match git.remote_url("origin") {
        Ok(url) => RepositoryId::from_remote_url(&url).ok_or_else(|| {
            debug!(%url, "origin is not a GitHub remote");
            AppError::RepositoryDetectionFailed
        }),
        Err(err) => {
            debug!(error = %err, "origin remote unavailable");
            Err(AppError::RepositoryDetectionFailed)
        }
    }
}
