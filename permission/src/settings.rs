use crate::PermissionError;

/// `Settings.ACTION_APPLICATION_DETAILS_SETTINGS`.
pub const ACTION_APPLICATION_DETAILS_SETTINGS: &str =
    "android.settings.APPLICATION_DETAILS_SETTINGS";

/// A resolved application settings screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsScreen {
    /// Platform action that opens the screen.
    pub action: String,
    /// Data URI naming the application, e.g. `package:com.example.app`.
    pub uri: String,
}

impl SettingsScreen {
    /// The application details screen for `app_id`.
    pub fn app_details(app_id: &str) -> Self {
        Self {
            action: ACTION_APPLICATION_DETAILS_SETTINGS.to_string(),
            uri: format!("package:{app_id}"),
        }
    }
}

/// The platform settings surface.
pub trait SettingsSurface: Send + Sync {
    /// Resolve the settings screen of `app_id`, or `None` when this device
    /// has nothing to show it.
    fn resolve(&self, app_id: &str) -> Option<SettingsScreen>;

    /// Navigate to a previously resolved screen.
    ///
    /// # Errors
    /// Returns a [`PermissionError`] if the platform refuses to open it.
    fn open(&self, screen: &SettingsScreen) -> Result<(), PermissionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_details_uri() {
        let screen = SettingsScreen::app_details("com.bignerdranch.android.permissions");
        assert_eq!(screen.action, "android.settings.APPLICATION_DETAILS_SETTINGS");
        assert_eq!(screen.uri, "package:com.bignerdranch.android.permissions");
    }
}
