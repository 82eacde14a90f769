//! Workflow definitions and the catalog entries derived from them.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_yaml::{Deserializer, Mapping, Value};

use super::trigger::TriggerDeclaration;

/// Declared `workflow_dispatch` inputs, keyed by input name.
pub type InputSchema = BTreeMap<String, InputSpec>;

/// One `workflow_dispatch` input declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InputSpec {
    pub description: String,
    pub required: bool,
    /// Empty when the input declares no default.
    pub default_value: String,
    /// Informational only (`string`, `choice`, `boolean`, ...).
    pub input_type: String,
    /// Populated for `choice` inputs.
    pub options: Vec<String>,
}

impl InputSpec {
    /// Build from an input's configuration mapping. Fields that are absent or
    /// of an unexpected type keep their zero value.
    pub fn from_mapping(config: &Mapping) -> Self {
        let text = |key: &str| {
            config.get(key).and_then(Value::as_str).map(str::to_string).unwrap_or_default()
        };

        Self {
            description: text("description"),
            required: config.get("required").and_then(Value::as_bool).unwrap_or(false),
            default_value: text("default"),
            input_type: text("type"),
            options: config
                .get("options")
                .and_then(Value::as_sequence)
                .map(|items| items.iter().filter_map(Value::as_str).map(str::to_string).collect())
                .unwrap_or_default(),
        }
    }

    pub fn is_choice(&self) -> bool {
        self.input_type == "choice" && !self.options.is_empty()
    }

    pub fn is_boolean(&self) -> bool {
        self.input_type == "boolean"
    }
}

/// A parsed workflow file, reduced to the fields dispatch cares about.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowDefinition {
    pub name: Option<String>,
    pub on: TriggerDeclaration,
}

impl WorkflowDefinition {
    /// Parse a workflow document.
    ///
    /// Only the first document of a multi-document stream is read, with merge
    /// keys applied. Documents that are valid YAML but not a mapping yield a
    /// definition with no name and an unrecognized trigger.
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        let mut document = match Deserializer::from_str(content).next() {
            Some(first) => Value::deserialize(first)?,
            None => Value::Null,
        };
        document.apply_merge()?;

        let name = document
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        let on = document.get("on").cloned().map(TriggerDeclaration::from).unwrap_or_default();

        Ok(Self { name, on })
    }
}

/// A workflow that can be dispatched manually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub display_name: String,
    /// Location under the workflows directory, for display.
    pub relative_path: String,
    /// File name including extension; addresses the workflow in the API.
    pub file_identifier: String,
    pub input_schema: InputSchema,
}

impl CatalogEntry {
    /// Returns an entry when the definition supports manual dispatch.
    pub fn from_definition(
        dir: &Path,
        file_name: &str,
        definition: WorkflowDefinition,
    ) -> Option<Self> {
        if file_name.is_empty() {
            return None;
        }
        let input_schema = definition.on.manual_dispatch()?;

        Some(Self {
            display_name: definition.name.unwrap_or_else(|| file_name.to_string()),
            relative_path: dir.join(file_name).to_string_lossy().into_owned(),
            file_identifier: file_name.to_string(),
            input_schema,
        })
    }

    pub fn has_inputs(&self) -> bool {
        !self.input_schema.is_empty()
    }
}
