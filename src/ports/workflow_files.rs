use std::path::Path;

use crate::domain::AppError;

/// One entry of a workflow directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowDirEntry {
    pub file_name: String,
    pub is_dir: bool,
}

/// Read access to workflow definition files.
pub trait WorkflowFiles {
    /// List `dir` non-recursively, sorted by file name.
    ///
    /// A missing directory is reported as `AppError::WorkflowDirNotFound`.
    fn list_dir(&self, dir: &Path) -> Result<Vec<WorkflowDirEntry>, AppError>;

    /// Read a file's full contents.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;
}
