use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::{WorkflowDirEntry, WorkflowFiles};

/// Filesystem-backed workflow file access.
///
/// Relative paths resolve against `root`; error messages keep the path as given.
#[derive(Debug, Clone)]
pub struct FilesystemWorkflowFiles {
    root: PathBuf,
}

impl FilesystemWorkflowFiles {
    /// Create a store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl WorkflowFiles for FilesystemWorkflowFiles {
    fn list_dir(&self, dir: &Path) -> Result<Vec<WorkflowDirEntry>, AppError> {
        let entries = fs::read_dir(self.resolve(dir)).map_err(|err| match err.kind() {
            ErrorKind::NotFound => AppError::WorkflowDirNotFound(dir.display().to_string()),
            _ => AppError::Io(err),
        })?;

        let mut listing = Vec::new();
        for entry in entries {
            let entry = entry?;
            // Follows symlinks so a linked workflow file is listed as a file.
            let is_dir = entry.path().is_dir();
            listing.push(WorkflowDirEntry {
                file_name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }
        listing.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(listing)
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        Ok(fs::read_to_string(self.resolve(path))?)
    }
}
