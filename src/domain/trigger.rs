//! Classification of a workflow's `on:` trigger declaration.
//!
//! Workflow files declare triggers in three shapes: a bare event name, a list
//! of event names, or a mapping from event name to its configuration. Only the
//! mapping form can carry `workflow_dispatch` inputs.

use serde_yaml::{Mapping, Value};

use super::workflow::{InputSchema, InputSpec};

/// Event name that enables manual dispatch.
pub const WORKFLOW_DISPATCH: &str = "workflow_dispatch";

/// Shape of a parsed `on:` declaration.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TriggerDeclaration {
    /// `on: push`
    Scalar(String),
    /// `on: [push, workflow_dispatch]`
    Sequence(Vec<Value>),
    /// `on: { push: ..., workflow_dispatch: ... }`
    Mapping(Mapping),
    /// Absent, null, or any non-string scalar.
    #[default]
    Unrecognized,
}

impl From<Value> for TriggerDeclaration {
    fn from(value: Value) -> Self {
        match value {
            Value::String(name) => TriggerDeclaration::Scalar(name),
            Value::Sequence(items) => TriggerDeclaration::Sequence(items),
            Value::Mapping(map) => TriggerDeclaration::Mapping(map),
            Value::Tagged(tagged) => TriggerDeclaration::from(tagged.value),
            Value::Null | Value::Bool(_) | Value::Number(_) => TriggerDeclaration::Unrecognized,
        }
    }
}

impl TriggerDeclaration {
    /// Returns the declared input schema when manual dispatch is supported.
    ///
    /// `None` means the workflow cannot be dispatched manually. `Some` with an
    /// empty schema means it can, but declares no inputs.
    pub fn manual_dispatch(&self) -> Option<InputSchema> {
        match self {
            TriggerDeclaration::Scalar(name) => {
                (name == WORKFLOW_DISPATCH).then(InputSchema::new)
            }
            TriggerDeclaration::Sequence(items) => items
                .iter()
                .any(|item| item.as_str() == Some(WORKFLOW_DISPATCH))
                .then(InputSchema::new),
            TriggerDeclaration::Mapping(map) => map.get(WORKFLOW_DISPATCH).map(extract_inputs),
            TriggerDeclaration::Unrecognized => None,
        }
    }

    pub fn supports_manual_dispatch(&self) -> bool {
        self.manual_dispatch().is_some()
    }
}

fn extract_inputs(dispatch_config: &Value) -> InputSchema {
    let Some(inputs) = dispatch_config.get("inputs").and_then(Value::as_mapping) else {
        return InputSchema::new();
    };

    inputs
        .iter()
        .filter_map(|(name, config)| {
            let name = name.as_str()?;
            let config = config.as_mapping()?;
            Some((name.to_string(), InputSpec::from_mapping(config)))
        })
        .collect()
}
