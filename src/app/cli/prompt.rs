//! Interactive prompts for the pick flow.

use std::collections::BTreeMap;

use dialoguer::{Confirm, Input, Select};

use crate::domain::{AppError, Branch, CatalogEntry, InputSchema, InputSpec};
use crate::domain::branch::position_of;

pub(super) fn select_workflow(
    catalog: &[CatalogEntry],
) -> Result<Option<&CatalogEntry>, AppError> {
    let items: Vec<String> = catalog
        .iter()
        .map(|entry| format!("{}  ({})", entry.display_name, entry.relative_path))
        .collect();

    let selection = Select::new()
        .with_prompt("Select a workflow")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Validation(format!("Failed to select workflow: {}", err)))?;

    Ok(selection.map(|index| &catalog[index]))
}

pub(super) fn select_branch(
    branches: &[Branch],
    current: Option<&str>,
) -> Result<Option<String>, AppError> {
    let items: Vec<&str> = branches.iter().map(|branch| branch.name.as_str()).collect();
    let prompt = match current {
        Some(current) => format!("Select a branch (current: {})", current),
        None => "Select a branch".to_string(),
    };

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(position_of(branches, current).unwrap_or(0))
        .interact_opt()
        .map_err(|err| AppError::Validation(format!("Failed to select branch: {}", err)))?;

    Ok(selection.map(|index| branches[index].name.clone()))
}

/// Ask for every declared input. Returns `None` when the user cancels.
pub(super) fn fill_inputs(
    schema: &InputSchema,
) -> Result<Option<BTreeMap<String, String>>, AppError> {
    let mut values = BTreeMap::new();
    for (name, spec) in schema {
        let Some(answer) = ask_input(name, spec)? else {
            return Ok(None);
        };
        record_answer(&mut values, name, answer);
    }
    Ok(Some(values))
}

fn ask_input(name: &str, spec: &InputSpec) -> Result<Option<String>, AppError> {
    let label = input_label(name, spec);
    let failed = |err: dialoguer::Error| {
        AppError::Validation(format!("Failed to read input '{}': {}", name, err))
    };

    if spec.is_choice() {
        let default = spec.options.iter().position(|o| *o == spec.default_value).unwrap_or(0);
        let selection = Select::new()
            .with_prompt(label)
            .items(&spec.options)
            .default(default)
            .interact_opt()
            .map_err(failed)?;
        return Ok(selection.map(|index| spec.options[index].clone()));
    }

    if spec.is_boolean() {
        let answer = Confirm::new()
            .with_prompt(label)
            .default(spec.default_value == "true")
            .interact_opt()
            .map_err(failed)?;
        return Ok(answer.map(|value| value.to_string()));
    }

    let required = spec.required;
    let mut input = Input::<String>::new().with_prompt(label).allow_empty(!required);
    if !spec.default_value.is_empty() {
        input = input.default(spec.default_value.clone());
    }
    let answer = input
        .validate_with(move |value: &String| -> Result<(), &'static str> {
            if required && value.trim().is_empty() {
                Err("a value is required")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(failed)?;
    Ok(Some(answer))
}

pub(super) fn confirm_dispatch(entry: &CatalogEntry, branch: &str) -> Result<bool, AppError> {
    let answer = Confirm::new()
        .with_prompt(format!(
            "Are you sure you want to dispatch workflow '{}' on branch '{}'?",
            entry.display_name, branch
        ))
        .default(false)
        .interact_opt()
        .map_err(|err| AppError::Validation(format!("Failed to confirm dispatch: {}", err)))?;

    Ok(answer == Some(true))
}

fn input_label(name: &str, spec: &InputSpec) -> String {
    let mut label = name.to_string();
    if spec.required {
        label.push_str(" (required)");
    }
    if !spec.description.is_empty() {
        label.push_str(": ");
        label.push_str(&spec.description);
    }
    label
}

/// Blank answers are left out so the workflow's own default applies.
fn record_answer(values: &mut BTreeMap<String, String>, name: &str, answer: String) {
    if !answer.trim().is_empty() {
        values.insert(name.to_string(), answer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_includes_requirement_and_description() {
        let spec = InputSpec {
            description: "Version to release".into(),
            required: true,
            ..Default::default()
        };
        assert_eq!(input_label("version", &spec), "version (required): Version to release");
        assert_eq!(input_label("notes", &InputSpec::default()), "notes");
    }

    #[test]
    fn blank_answers_are_not_sent() {
        let mut values = BTreeMap::new();
        record_answer(&mut values, "notes", "  ".to_string());
        record_answer(&mut values, "env", "prod".to_string());
        record_answer(&mut values, "dry_run", "false".to_string());

        assert_eq!(values.len(), 2);
        assert_eq!(values["env"], "prod");
        assert_eq!(values["dry_run"], "false");
    }
}
