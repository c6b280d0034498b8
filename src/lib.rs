//! # Permikit
//!
//! Runtime permission request flows for mobile-style permission models.
//!
//! A flow asks the platform for a set of permissions, interprets the
//! asynchronous outcome and decides what the user sees: an acknowledgment
//! when everything is granted, a short "denied" notice when the user can be
//! asked again, or a dialog offering the application settings screen when
//! the platform will no longer prompt.
//!
//! ## Features
//!
//! - `permission`: identifiers, requests, outcomes and the platform backends.
//! - `dialog`: notices, the open-settings dialog and the `Presenter` trait.
//! - `flow`: the permission flow controller and the stock features
//!   (enabled by default).
//!
//! Use the `full` feature to enable everything.
//!
//! ## Example
//!
//! ```toml
//! [dependencies]
//! permikit = { version = "0.1", features = ["flow"] }
//! ```
//!
//! ```rust,no_run
//! use permikit::flow::{FlowContext, RequestMode, features};
//!
//! async fn on_request_camera_clicked(context: FlowContext) {
//!     let camera = features::camera(context, RequestMode::Launcher);
//!     if let Ok(state) = camera.request_permissions().resolve().await {
//!         println!("camera flow ended: {state}");
//!     }
//! }
//! ```

#[cfg(feature = "dialog")]
pub use permikit_dialog as dialog;

#[cfg(feature = "flow")]
pub use permikit_flow as flow;

#[cfg(feature = "permission")]
pub use permikit_permission as permission;
