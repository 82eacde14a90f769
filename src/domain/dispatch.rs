//! Workflow dispatch request construction.

use std::collections::BTreeMap;

use serde::Serialize;

use super::AppError;

/// Everything needed to trigger one workflow run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchIntent {
    pub owner: String,
    pub repo_name: String,
    /// Workflow file name, e.g. `deploy.yml`.
    pub file_identifier: String,
    /// Branch or tag to run against.
    pub git_ref: String,
    /// Sent as-is; keys are not checked against the workflow's input schema.
    pub input_values: BTreeMap<String, String>,
}

/// Wire-ready dispatch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRequest {
    /// Relative API path.
    pub endpoint: String,
    /// JSON body.
    pub payload: Vec<u8>,
}

#[derive(Serialize)]
struct DispatchPayload<'a> {
    #[serde(rename = "ref")]
    git_ref: &'a str,
    #[serde(skip_serializing_if = "no_inputs")]
    inputs: &'a BTreeMap<String, String>,
}

fn no_inputs(inputs: &&BTreeMap<String, String>) -> bool {
    inputs.is_empty()
}

impl DispatchIntent {
    /// Validate the intent and build the request.
    ///
    /// Checks run in a fixed order and stop at the first missing field.
    pub fn build(&self) -> Result<DispatchRequest, AppError> {
        if self.owner.is_empty() || self.repo_name.is_empty() {
            return Err(AppError::Validation("owner and repo are required".to_string()));
        }
        if self.file_identifier.is_empty() {
            return Err(AppError::Validation("workflow file is required".to_string()));
        }
        if self.git_ref.is_empty() {
            return Err(AppError::Validation("ref (branch) is required".to_string()));
        }

        let endpoint = format!(
            "repos/{}/{}/actions/workflows/{}/dispatches",
            self.owner, self.repo_name, self.file_identifier
        );
        let payload = serde_json::to_vec(&DispatchPayload {
            git_ref: &self.git_ref,
            inputs: &self.input_values,
        })?;

        Ok(DispatchRequest { endpoint, payload })
    }
}
