use std::fmt;

use super::AppError;

/// GitHub repository coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryId {
    pub owner: String,
    pub name: String,
}

impl RepositoryId {
    /// Parse `owner/name`.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        let invalid =
            || AppError::Validation(format!("Invalid repository '{}': expected OWNER/NAME", value));

        let (owner, name) = value.trim().split_once('/').ok_or_else(invalid)?;
        let name = name.trim_end_matches(".git");
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        Ok(Self { owner: owner.to_string(), name: name.to_string() })
    }

    /// Extract coordinates from a GitHub remote URL.
    pub fn from_remote_url(url: &str) -> Option<Self> {
        parse_github_url(url.trim()).and_then(|slug| Self::parse(&slug).ok())
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Parse a GitHub URL to extract `owner/repo`.
fn parse_github_url(url: &str) -> Option<String> {
    const PREFIXES: [&str; 4] = [
        "git@github.com:",
        "ssh://git@github.com/",
        "https://github.com/",
        "http://github.com/",
    ];

    PREFIXES.iter().find_map(|prefix| url.strip_prefix(prefix)).map(|rest| {
        rest.trim_end_matches('/').trim_end_matches(".git").to_string()
    })
}
