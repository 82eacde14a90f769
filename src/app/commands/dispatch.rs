//! Workflow dispatch execution.

use tracing::info;

use crate::domain::{AppError, DispatchIntent, DispatchRequest};
use crate::ports::{GitHubTransport, HttpMethod};

/// POST a built request. Any 2xx response is success; nothing is retried.
pub fn execute(
    transport: &(impl GitHubTransport + ?Sized),
    request: &DispatchRequest,
) -> Result<(), AppError> {
    let response = transport
        .request(HttpMethod::Post, &request.endpoint, Some(request.payload.as_slice()))
        .map_err(|err| AppError::DispatchTransport(err.to_string()))?;

    if !response.is_success() {
        return Err(AppError::UnexpectedStatus(response.status));
    }

    info!(endpoint = %request.endpoint, status = response.status, "workflow dispatched");
    Ok(())
}

/// Validate, build and send a dispatch intent.
///
/// Validation failures return before the transport is touched.
pub fn run(
    transport: &(impl GitHubTransport + ?Sized),
    intent: &DispatchIntent,
) -> Result<(), AppError> {
    let request = intent.build()?;
    execute(transport, &request)
}
