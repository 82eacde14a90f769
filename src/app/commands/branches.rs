//! Remote branch listing.

use crate::domain::branch::branches_endpoint;
use crate::domain::{AppError, Branch};
use crate::ports::{GitHubTransport, HttpMethod};

/// Fetch the first page of a repository's branches.
pub fn fetch_branches(
    transport: &(impl GitHubTransport + ?Sized),
    owner: &str,
    repo: &str,
) -> Result<Vec<Branch>, AppError> {
    let response = transport
        .request(HttpMethod::Get, &branches_endpoint(owner, repo), None)
        .map_err(|err| AppError::BranchFetch(err.to_string()))?;

    if !response.is_success() {
        return Err(AppError::BranchFetch(format!("unexpected status code: {}", response.status)));
    }

    serde_json::from_slice(&response.body).map_err(|err| AppError::BranchFetch(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTransport;

    #[test]
    fn lists_branches_in_response_order() {
        let transport = FakeTransport::with_body(200, r#"[{"name":"main"},{"name":"develop"}]"#);
        let branches = fetch_branches(&transport, "user", "repo").unwrap();

        let names: Vec<_> = branches.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["main", "develop"]);
        assert_eq!(transport.recorded()[0].method, HttpMethod::Get);
        assert_eq!(transport.recorded()[0].path, "repos/user/repo/branches?per_page=100");
    }

    #[test]
    fn empty_list_is_ok() {
        let transport = FakeTransport::with_body(200, "[]");
        assert!(fetch_branches(&transport, "user", "repo").unwrap().is_empty());
    }

    #[test]
    fn transport_error_is_wrapped() {
        let transport = FakeTransport::failing("api error");
        let err = fetch_branches(&transport, "user", "repo").unwrap_err();
        assert_eq!(err.to_string(), "failed to fetch branches: api error");
    }

    #[test]
    fn error_status_is_wrapped() {
        let transport = FakeTransport::with_body(404, r#"{"message":"Not Found"}"#);
        let err = fetch_branches(&transport, "user", "repo").unwrap_err();
        assert_eq!(err.to_string(), "failed to fetch branches: unexpected status code: 404");
    }

    #[test]
    fn undecodable_body_is_wrapped() {
        let transport = FakeTransport::with_body(200, "{}");
        assert!(matches!(
            fetch_branches(&transport, "user", "repo"),
            Err(AppError::BranchFetch(_))
        ));
    }
}
