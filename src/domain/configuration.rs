//! Tool configuration loaded from `.github/gh-dispatch.toml`.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Repository-relative location of the optional configuration file.
pub const CONFIG_FILE: &str = ".github/gh-dispatch.toml";

/// Conventional workflow definitions directory.
pub const DEFAULT_WORKFLOWS_DIR: &str = ".github/workflows";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DispatchConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub workflows: WorkflowsConfig,
}

impl DispatchConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.api.validate()?;
        self.workflows.validate()?;
        Ok(())
    }
}

/// GitHub REST API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// API root; GitHub Enterprise installs point this at `https://<host>/api/v3/`.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_secs: default_timeout() }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.base_url.cannot_be_a_base() {
            return Err(AppError::InvalidConfig(format!(
                "base_url '{}' cannot be used as a base URL",
                self.base_url
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkflowsConfig {
    /// Workflow definitions directory, relative to the repository root.
    #[serde(default = "default_workflows_dir")]
    pub dir: String,
}

impl Default for WorkflowsConfig {
    fn default() -> Self {
        Self { dir: default_workflows_dir() }
    }
}

impl WorkflowsConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.dir.trim().is_empty() {
            return Err(AppError::InvalidConfig("workflows.dir must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_base_url() -> Url {
    Url::parse("https://api.github.com/").expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    30
}

fn default_workflows_dir() -> String {
    DEFAULT_WORKFLOWS_DIR.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_config_defaults() {
        let config = DispatchConfig::default();
        assert_eq!(config.api.base_url.as_str(), "https://api.github.com/");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.workflows.dir, ".github/workflows");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_api_config_invalid_timeout() {
        let config = ApiConfig { timeout_secs: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn validate_api_config_rejects_non_base_url() {
        let base_url = Url::parse("mailto:ops@example.com").unwrap();
        let config = ApiConfig { base_url, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_workflows_config_empty_dir() {
        let config = WorkflowsConfig { dir: "  ".to_string() };
        assert!(config.validate().is_err());
    }
}
