use std::process::Command;

use tracing::debug;

use crate::domain::AppError;

const TOKEN_ENV_VARS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];

/// Resolve a GitHub token from the environment, falling back to the `gh` CLI.
pub fn resolve_token() -> Result<String, AppError> {
    if let Some(token) = token_from_env() {
        return Ok(token);
    }

    debug!("no token in environment, asking gh CLI");
    token_from_gh().map_err(|err| {
        AppError::config_error(format!(
            "GitHub token not found. Set GH_TOKEN or run 'gh auth login' ({})",
            err
        ))
    })
}

fn token_from_env() -> Option<String> {
    TOKEN_ENV_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

fn token_from_gh() -> Result<String, AppError> {
    let output = Command::new("gh").args(["auth", "token"]).output().map_err(|e| {
        AppError::ExternalToolError {
            tool: "gh".into(),
            error: format!("Failed to execute gh CLI: {}", e),
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AppError::ExternalToolError {
            tool: "gh".into(),
            error: format!("gh auth token failed: {}", stderr.trim()),
        });
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Err(AppError::ExternalToolError {
            tool: "gh".into(),
            error: "gh auth token returned no token".into(),
        });
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    struct EnvGuard {
        saved: Vec<(&'static str, Option<String>)>,
    }

    impl EnvGuard {
        fn set(values: &[(&'static str, Option<&str>)]) -> Self {
            let saved = values.iter().map(|(name, _)| (*name, std::env::var(name).ok())).collect();
            for (name, value) in values {
                unsafe {
                    match value {
                        Some(value) => std::env::set_var(name, value),
                        None => std::env::remove_var(name),
                    }
                }
            }
            Self { saved }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (name, value) in &self.saved {
                unsafe {
                    match value {
                        Some(value) => std::env::set_var(name, value),
                        None => std::env::remove_var(name),
                    }
                }
            }
        }
    }

    #[test]
    #[serial]
    fn gh_token_takes_precedence() {
        let _env =
            EnvGuard::set(&[("GH_TOKEN", Some("gh-value")), ("GITHUB_TOKEN", Some("other"))]);
        assert_eq!(resolve_token().unwrap(), "gh-value");
    }

    #[test]
    #[serial]
    fn github_token_is_used_when_gh_token_blank() {
        let _env =
            EnvGuard::set(&[("GH_TOKEN", Some("  ")), ("GITHUB_TOKEN", Some("ci-token"))]);
        assert_eq!(resolve_token().unwrap(), "ci-token");
    }
}
