//! Interactive dispatch flow.

use std::path::Path;

use crate::app::api;
use crate::app::commands::{branches, dispatch};
use crate::domain::{AppError, DispatchIntent};

use super::prompt;

pub(super) fn run_pick(repo: Option<&str>, dir: Option<&Path>) -> Result<(), AppError> {
    let ctx = api::open()?;
    let catalog = ctx.catalog(dir)?;
    if catalog.is_empty() {
        super::print_empty_catalog(&ctx.workflows_dir(dir));
        return Ok(());
    }

    let repository = ctx.repository(repo)?;
    let client = api::connect(ctx.config())?;
    let branches = branches::fetch_branches(&client, &repository.owner, &repository.name)?;
    if branches.is_empty() {
        return Err(AppError::Validation(format!("No branches found in {}", repository)));
    }
    let current = ctx.current_branch();

    let Some(entry) = prompt::select_workflow(&catalog)? else {
        return quit();
    };
    let Some(branch) = prompt::select_branch(&branches, current.as_deref())? else {
        return quit();
    };
    let Some(input_values) = prompt::fill_inputs(&entry.input_schema)? else {
        return quit();
    };
    if !prompt::confirm_dispatch(entry, &branch)? {
        return quit();
    }

    println!("🚀 Dispatching {} on branch {}...", entry.display_name, branch);
    let intent = DispatchIntent {
        owner: repository.owner,
        repo_name: repository.name,
        file_identifier: entry.file_identifier.clone(),
        git_ref: branch,
        input_values,
    };
    dispatch::run(&client, &intent)?;
    println!("✅ Successfully dispatched! Check your Actions tab.");
    Ok(())
}

fn quit() -> Result<(), AppError> {
    println!("Quit.");
    Ok(())
}
