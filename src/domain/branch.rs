use serde::Deserialize;

/// Remote branch as returned by the branches endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Branch {
    pub name: String,
}

/// Relative API path listing a repository's branches.
pub fn branches_endpoint(owner: &str, repo: &str) -> String {
    format!("repos/{}/{}/branches?per_page=100", owner, repo)
}

/// Index of `current` within `branches`, used to preselect it.
pub fn position_of(branches: &[Branch], current: Option<&str>) -> Option<usize> {
    let current = current?;
    branches.iter().position(|branch| branch.name == current)
}
