//! Notices and the open-settings dialog shown by permission flows.
//!
//! The flow never draws anything itself. It hands [`Notice`]s and
//! [`SettingsDialog`]s to a [`Presenter`] owned by the host UI.

#![warn(missing_docs)]

mod error;

/// Platform-specific implementations.
pub mod sys;

use std::fmt;
use std::sync::Arc;

use permikit_permission::{SettingsScreen, SettingsSurface};

pub use error::DialogError;

/// A transient message: a toast on mobile, a notification on desktop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Text of the notice.
    pub text: String,
}

impl Notice {
    /// Create a notice.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// The "Open" action of a [`SettingsDialog`].
///
/// [`SettingsAction::open`] consumes the action, so one dialog navigates to
/// the settings screen at most once.
pub struct SettingsAction {
    screen: SettingsScreen,
    surface: Arc<dyn SettingsSurface>,
}

impl fmt::Debug for SettingsAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsAction")
            .field("screen", &self.screen)
            .finish_non_exhaustive()
    }
}

impl SettingsAction {
    /// Bind a resolved screen to the surface that can open it.
    pub fn new(screen: SettingsScreen, surface: Arc<dyn SettingsSurface>) -> Self {
        Self { screen, surface }
    }

    /// The screen this action navigates to.
    #[must_use]
    pub const fn screen(&self) -> &SettingsScreen {
        &self.screen
    }

    /// Navigate to the settings screen.
    ///
    /// # Errors
    /// Returns [`DialogError::Settings`] if the platform refuses to open it.
    pub fn open(self) -> Result<(), DialogError> {
        log::info!("opening settings screen {}", self.screen.uri);
        self.surface.open(&self.screen)?;
        Ok(())
    }
}

/// Modal dialog offering to open the application settings.
#[derive(Debug)]
pub struct SettingsDialog {
    /// Title of the dialog.
    pub title: String,
    /// Message content of the dialog.
    pub message: String,
    /// Label of the only actionable button.
    pub open_label: String,
    /// What the button does.
    pub action: SettingsAction,
}

/// Renders what a permission flow asks for.
///
/// Both methods are fire-and-forget and must not block the caller.
pub trait Presenter: Send + Sync {
    /// Show a transient notice.
    fn show_notice(&self, notice: Notice);

    /// Show the open-settings dialog.
    fn show_settings_dialog(&self, dialog: SettingsDialog);
}

#[cfg(not(any(target_os = "android", target_os = "ios")))]
pub use sys::NativePresenter;
