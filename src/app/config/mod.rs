//! Repository-backed configuration loaders.
//!
//! Pure schema/model parsing lives in `domain::configuration`.

mod detect_repository;
mod load_config;

pub use detect_repository::{REPO_ENV, detect_repository};
pub use load_config::{API_URL_ENV, load_config, parse_config_content};
