//! Tool configuration loading from the repository.

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;
use url::Url;

use crate::domain::{AppError, CONFIG_FILE, DispatchConfig};
use crate::ports::WorkflowFiles;

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "GH_DISPATCH_API_URL";

/// Load `.github/gh-dispatch.toml`, falling back to defaults when it is absent.
pub fn load_config(files: &impl WorkflowFiles) -> Result<DispatchConfig, AppError> {
    let mut config = match files.read_file(Path::new(CONFIG_FILE)) {
        Ok(content) => parse_config_content(&content)?,
        Err(AppError::Io(err)) if err.kind() == ErrorKind::NotFound => {
            debug!("no {} found, using defaults", CONFIG_FILE);
            DispatchConfig::default()
        }
        Err(err) => return Err(err),
    };

    apply_env_overrides(&mut config, std::env::var(API_URL_ENV).ok())?;
    Ok(config)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<DispatchConfig, AppError> {
    let config: DispatchConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

pub(crate) fn apply_env_overrides(
    config: &mut DispatchConfig,
    api_url: Option<String>,
) -> Result<(), AppError> {
    if let Some(raw) = api_url.filter(|value| !value.trim().is_empty()) {
        config.api.base_url = Url::parse(raw.trim()).map_err(|e| {
            AppError::InvalidConfig(format!("{} '{}' is not a valid URL: {}", API_URL_ENV, raw, e))
        })?;
        config.api.validate()?;
    }
    Ok(())
}
