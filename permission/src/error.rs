use thiserror::Error;

/// Errors that can occur while requesting permissions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermissionError {
    /// A request must name at least one permission.
    #[error("permission request is empty")]
    EmptyRequest,

    /// The platform dropped the responder without delivering an outcome.
    #[error("permission outcome was never delivered")]
    OutcomeDropped,

    /// The application settings screen cannot be resolved on this device.
    #[error("application settings screen is unavailable")]
    SettingsUnavailable,

    /// The operation is not supported on this platform.
    #[error("not supported on this platform")]
    NotSupported,

    /// An error occurred in the underlying platform implementation.
    #[error("platform error: {0}")]
    Platform(String),
}
