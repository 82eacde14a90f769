mod fake_git;
mod fake_transport;
mod memory_workflow_files;

pub use fake_git::FakeGit;
pub use fake_transport::{FakeTransport, RecordedRequest};
pub use memory_workflow_files::MemoryWorkflowFiles;
