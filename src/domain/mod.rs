pub mod branch;
pub mod configuration;
pub mod dispatch;
pub mod error;
pub mod repository;
pub mod trigger;
pub mod workflow;

pub use branch::Branch;
pub use configuration::{
    ApiConfig, CONFIG_FILE, DEFAULT_WORKFLOWS_DIR, DispatchConfig, WorkflowsConfig,
};
pub use dispatch::{DispatchIntent, DispatchRequest};
pub use error::AppError;
pub use repository::RepositoryId;
pub use trigger::{TriggerDeclaration, WORKFLOW_DISPATCH};
pub use workflow::{CatalogEntry, InputSchema, InputSpec, WorkflowDefinition};
