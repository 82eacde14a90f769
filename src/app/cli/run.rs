//! Non-interactive dispatch.

use std::collections::BTreeMap;
use std::path::Path;

use crate::app::api;
use crate::app::commands::dispatch;
use crate::domain::{AppError, CatalogEntry, DispatchIntent};

pub(super) fn run_dispatch(
    repo: Option<&str>,
    dir: Option<&Path>,
    workflow: &str,
    git_ref: Option<String>,
    fields: &[String],
) -> Result<(), AppError> {
    let input_values = parse_fields(fields)?;
    let ctx = api::open()?;
    let catalog = ctx.catalog(dir)?;
    let entry = find_workflow(&catalog, workflow)?;
    let repository = ctx.repository(repo)?;

    let intent = DispatchIntent {
        owner: repository.owner,
        repo_name: repository.name,
        file_identifier: entry.file_identifier.clone(),
        git_ref: git_ref.or_else(|| ctx.current_branch()).unwrap_or_default(),
        input_values,
    };
    let request = intent.build()?;
    let client = api::connect(ctx.config())?;

    println!("🚀 Dispatching {} on branch {}...", entry.display_name, intent.git_ref);
    dispatch::execute(&client, &request)?;
    println!("✅ Successfully dispatched! Check your Actions tab.");
    Ok(())
}

fn parse_fields(fields: &[String]) -> Result<BTreeMap<String, String>, AppError> {
    fields
        .iter()
        .map(|field| match field.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_string(), value.to_string()))
            }
            _ => Err(AppError::Validation(format!(
                "Invalid field '{}': expected KEY=VALUE",
                field
            ))),
        })
        .collect()
}

/// Match by file name, then file stem, then declared name.
fn find_workflow<'a>(
    catalog: &'a [CatalogEntry],
    query: &str,
) -> Result<&'a CatalogEntry, AppError> {
    let stem = |entry: &CatalogEntry| {
        Path::new(&entry.file_identifier)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    };

    catalog
        .iter()
        .find(|entry| entry.file_identifier == query)
        .or_else(|| catalog.iter().find(|entry| stem(entry) == query))
        .or_else(|| catalog.iter().find(|entry| entry.display_name == query))
        .ok_or_else(|| {
            let available: Vec<&str> =
                catalog.iter().map(|entry| entry.file_identifier.as_str()).collect();
            AppError::WorkflowNotFound {
                name: query.to_string(),
                available: if available.is_empty() {
                    "(none)".to_string()
                } else {
                    available.join(", ")
                },
            }
        })
}
