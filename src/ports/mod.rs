mod git;
mod github;
mod workflow_files;

pub use git::GitPort;
pub use github::{ApiResponse, GitHubTransport, HttpMethod};
pub use workflow_files::{WorkflowDirEntry, WorkflowFiles};
