//! gh-dispatch: find manually dispatchable GitHub Actions workflows and trigger them.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{dispatch, list_branches, list_workflows};
pub use domain::{
    AppError, Branch, CatalogEntry, DispatchIntent, DispatchRequest, InputSchema, InputSpec,
    RepositoryId, TriggerDeclaration, WorkflowDefinition,
};
