//! Permission request flows.
//!
//! A [`PermissionFlowController`] asks the platform for a set of
//! permissions, then either runs its granted hook, shows a "denied" notice
//! when the user may be asked again, or offers the application settings
//! screen when the platform will no longer prompt.
//!
//! ```no_run
//! # async fn demo(context: permikit_flow::FlowContext) -> Result<(), permikit_flow::FlowError> {
//! use permikit_flow::{RequestMode, features};
//!
//! let location = features::location(context, RequestMode::Launcher);
//! let state = location.request_permissions().resolve().await?;
//! println!("location flow ended: {state}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod context;
mod controller;
mod error;
mod messages;
mod state;

pub mod features;
pub mod legacy;

pub use context::FlowContext;
pub use controller::{FlowBuilder, PendingFlow, PermissionFlowController, RequestMode};
pub use error::FlowError;
pub use messages::FlowMessages;
pub use state::{Denial, FlowState, SettingsAvailability};

pub use permikit_dialog::{Notice, Presenter, SettingsAction, SettingsDialog};
pub use permikit_permission::{
    PermissionError, PermissionId, PermissionOutcome, PermissionPlatform, PermissionRequest,
    PermissionStatus, Responder, SettingsScreen, SettingsSurface,
};
