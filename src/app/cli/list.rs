use std::fmt::Write as _;
use std::path::Path;

use crate::app::api;
use crate::domain::{AppError, CatalogEntry, InputSpec};

pub(super) fn run_list(dir: Option<&Path>, json: bool) -> Result<(), AppError> {
    let ctx = api::open()?;
    let catalog = ctx.catalog(dir)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    if catalog.is_empty() {
        super::print_empty_catalog(&ctx.workflows_dir(dir));
        return Ok(());
    }

    print!("{}", render_catalog(&catalog));
    Ok(())
}

fn render_catalog(catalog: &[CatalogEntry]) -> String {
    let mut out = String::new();
    for entry in catalog {
        let _ = writeln!(out, "{}", entry.display_name);
        let _ = writeln!(out, "  path: {}", entry.relative_path);
        if entry.has_inputs() {
            let _ = writeln!(out, "  inputs:");
            for (name, spec) in &entry.input_schema {
                let _ = writeln!(out, "    {}{}", name, describe_input(spec));
            }
        }
    }
    out
}

fn describe_input(spec: &InputSpec) -> String {
    let mut traits = Vec::new();
    if !spec.input_type.is_empty() {
        traits.push(spec.input_type.clone());
    }
    if spec.required {
        traits.push("required".to_string());
    }
    if !spec.default_value.is_empty() {
        traits.push(format!("default: {}", spec.default_value));
    }
    if !spec.options.is_empty() {
        traits.push(format!("options: {}", spec.options.join("|")));
    }

    let mut text = String::new();
    if !traits.is_empty() {
        text.push_str(&format!(" ({})", traits.join(", ")));
    }
    if !spec.description.is_empty() {
        text.push_str(&format!(" - {}", spec.description));
    }
    text
}
