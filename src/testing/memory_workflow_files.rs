use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{WorkflowDirEntry, WorkflowFiles};

/// In-memory workflow directory that keeps insertion order for listings.
#[derive(Default)]
pub struct MemoryWorkflowFiles {
    dirs: HashMap<PathBuf, Vec<WorkflowDirEntry>>,
    contents: HashMap<PathBuf, String>,
    unreadable: Vec<PathBuf>,
    pub reads: Mutex<Vec<PathBuf>>,
}

impl MemoryWorkflowFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty directory.
    pub fn with_dir(mut self, dir: &str) -> Self {
        self.dirs.entry(PathBuf::from(dir)).or_default();
        self
    }

    pub fn with_file(mut self, dir: &str, name: &str, content: &str) -> Self {
        self.push_entry(dir, name, false);
        self.contents.insert(Path::new(dir).join(name), content.to_string());
        self
    }

    pub fn with_subdir(mut self, dir: &str, name: &str) -> Self {
        self.push_entry(dir, name, true);
        self
    }

    /// A listed file whose read fails.
    pub fn with_unreadable(mut self, dir: &str, name: &str) -> Self {
        self.push_entry(dir, name, false);
        self.unreadable.push(Path::new(dir).join(name));
        self
    }

    pub fn read_count(&self) -> usize {
        self.reads.lock().unwrap().len()
    }

    fn push_entry(&mut self, dir: &str, name: &str, is_dir: bool) {
        self.dirs
            .entry(PathBuf::from(dir))
            .or_default()
            .push(WorkflowDirEntry { file_name: name.to_string(), is_dir });
    }
}

impl WorkflowFiles for MemoryWorkflowFiles {
    fn list_dir(&self, dir: &Path) -> Result<Vec<WorkflowDirEntry>, AppError> {
        self.dirs
            .get(dir)
            .cloned()
            .ok_or_else(|| AppError::WorkflowDirNotFound(dir.display().to_string()))
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        self.reads.lock().unwrap().push(path.to_path_buf());
        if self.unreadable.iter().any(|p| p == path) {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "permission denied",
            )));
        }
        self.contents.get(path).cloned().ok_or_else(|| {
            AppError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"))
        })
    }
}
