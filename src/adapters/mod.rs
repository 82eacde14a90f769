pub mod gh_token;
pub mod git_repository;
pub mod github_http;
pub mod workflow_filesystem;

pub use git_repository::GitRepositoryAdapter;
pub use github_http::HttpGitHubClient;
pub use workflow_filesystem::FilesystemWorkflowFiles;
