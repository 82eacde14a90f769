//! Workflow catalog scan.

use std::ffi::OsStr;
use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, CatalogEntry, WorkflowDefinition};
use crate::ports::WorkflowFiles;

const WORKFLOW_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// Scan `dir` for workflows that support manual dispatch.
///
/// Only a missing directory is an error. Unreadable or malformed files are
/// skipped. Entries keep the listing order of `dir`.
pub fn scan(files: &impl WorkflowFiles, dir: &Path) -> Result<Vec<CatalogEntry>, AppError> {
    let entries = files.list_dir(dir)?;

    let catalog = entries
        .iter()
        .filter(|entry| !entry.is_dir && is_workflow_file(&entry.file_name))
        .filter_map(|entry| load_entry(files, dir, &entry.file_name))
        .collect();

    Ok(catalog)
}

fn is_workflow_file(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| WORKFLOW_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

fn load_entry(files: &impl WorkflowFiles, dir: &Path, file_name: &str) -> Option<CatalogEntry> {
    let path = dir.join(file_name);

    let content = match files.read_file(&path) {
        Ok(content) => content,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "skipping unreadable workflow file");
            return None;
        }
    };

    let definition = match WorkflowDefinition::parse(&content) {
        Ok(definition) => definition,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "skipping malformed workflow file");
            return None;
        }
    };

    CatalogEntry::from_definition(dir, file_name, definition)
}
