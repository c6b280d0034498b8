//! Runtime permission model.
//!
//! This crate holds the vocabulary shared by every permission flow:
//! identifiers, requests, outcomes, the platform permission subsystem and
//! the application settings surface. Native backends live in [`sys`].

#![warn(missing_docs)]

mod error;
mod outcome;
mod platform;
mod request;
mod settings;

/// Platform-specific implementations.
pub mod sys;

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use error::PermissionError;
pub use outcome::{PERMISSION_GRANTED, PermissionOutcome};
pub use platform::{OutcomeReceiver, PermissionPlatform, Responder, outcome_channel};
pub use request::PermissionRequest;
pub use settings::{ACTION_APPLICATION_DETAILS_SETTINGS, SettingsScreen, SettingsSurface};

/// A platform-defined permission identifier, e.g. `android.permission.CAMERA`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionId(Cow<'static, str>);

impl PermissionId {
    /// Approximate location.
    pub const ACCESS_COARSE_LOCATION: Self =
        Self::from_static("android.permission.ACCESS_COARSE_LOCATION");
    /// Precise location.
    pub const ACCESS_FINE_LOCATION: Self =
        Self::from_static("android.permission.ACCESS_FINE_LOCATION");
    /// Camera.
    pub const CAMERA: Self = Self::from_static("android.permission.CAMERA");
    /// Microphone recording.
    pub const RECORD_AUDIO: Self = Self::from_static("android.permission.RECORD_AUDIO");

    /// Create an identifier from a static string.
    #[must_use]
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    /// Create an identifier from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    /// The raw identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PermissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for PermissionId {
    fn from(id: &'static str) -> Self {
        Self::from_static(id)
    }
}

impl From<String> for PermissionId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// The current status of a permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionStatus {
    /// Permission has been granted by the user.
    Granted,
    /// Permission has not been granted.
    Denied,
}

impl PermissionStatus {
    /// Returns `true` for [`PermissionStatus::Granted`].
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

impl From<bool> for PermissionStatus {
    fn from(granted: bool) -> Self {
        if granted { Self::Granted } else { Self::Denied }
    }
}
