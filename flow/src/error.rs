use permikit_permission::PermissionError;
use thiserror::Error;

/// Errors that can occur while running a permission flow.
#[derive(Error, Debug)]
pub enum FlowError {
    /// The platform failed to deliver the outcome.
    #[error("permission error: {0}")]
    Permission(#[from] PermissionError),

    /// Flow messages could not be parsed.
    #[error("invalid flow messages: {0}")]
    Messages(#[from] serde_json::Error),
}
