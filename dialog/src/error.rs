use permikit_permission::PermissionError;
use thiserror::Error;

/// Errors that can occur when acting on a dialog.
#[derive(Error, Debug)]
pub enum DialogError {
    /// The settings screen behind the "Open" action could not be opened.
    #[error("Settings error: {0}")]
    Settings(#[from] PermissionError),
}
