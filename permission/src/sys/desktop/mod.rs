//! Desktop permission implementation.
//!
//! Linux, macOS and Windows applications have no runtime permission prompt
//! comparable to the mobile one. Access is governed by the OS or the sandbox
//! (device files, portals, privacy panes), so every permission is reported
//! as granted and no per-application settings screen resolves.

use crate::{
    PermissionError, PermissionId, PermissionPlatform, PermissionRequest, PermissionStatus,
    Responder, SettingsScreen, SettingsSurface,
};

/// Permission subsystem for desktop targets.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopPlatform;

impl PermissionPlatform for DesktopPlatform {
    fn check(&self, _id: &PermissionId) -> PermissionStatus {
        PermissionStatus::Granted
    }

    fn should_show_rationale(&self, _id: &PermissionId) -> bool {
        false
    }

    fn request(&self, request: &PermissionRequest, responder: Responder) {
        log::debug!("desktop grants {:?} without prompting", request.ids());
        responder.respond_all(true);
    }
}

/// Settings surface for desktop targets.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopSettings;

impl SettingsSurface for DesktopSettings {
    fn resolve(&self, _app_id: &str) -> Option<SettingsScreen> {
        None
    }

    fn open(&self, _screen: &SettingsScreen) -> Result<(), PermissionError> {
        Err(PermissionError::SettingsUnavailable)
    }
}
