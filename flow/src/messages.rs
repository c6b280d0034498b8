use serde::{Deserialize, Serialize};

use crate::FlowError;

/// Every user-visible string a flow can produce.
///
/// Missing fields fall back to the defaults when deserializing, so a host
/// can override only what it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowMessages {
    /// Notice for an ordinary, retriable denial.
    pub denied: String,
    /// Notice for a permanent denial when the settings screen is missing.
    pub denied_forever: String,
    /// Title of the open-settings dialog.
    pub settings_title: String,
    /// Body of the open-settings dialog.
    pub settings_message: String,
    /// Label of the dialog's "Open" button.
    pub settings_open: String,
    /// Notice for the granted location feature.
    pub location_granted: String,
    /// Notice for the granted camera feature.
    pub camera_granted: String,
}

impl Default for FlowMessages {
    fn default() -> Self {
        Self {
            denied: "Permission denied".to_string(),
            denied_forever: "Permissions are denied forever".to_string(),
            settings_title: "Permissions denied".to_string(),
            settings_message: "You have denied permissions forever. \
                               You can change your decision in app settings.\n\n\
                               Would you like to open app settings?"
                .to_string(),
            settings_open: "Open".to_string(),
            location_granted: "Location permission is granted".to_string(),
            camera_granted: "Camera permissions is granted".to_string(),
        }
    }
}

impl FlowMessages {
    /// Parse messages from JSON.
    ///
    /// # Errors
    /// Returns [`FlowError::Messages`] if `json` is not a valid messages
    /// object.
    pub fn from_json(json: &str) -> Result<Self, FlowError> {
        Ok(serde_json::from_str(json)?)
    }
}
