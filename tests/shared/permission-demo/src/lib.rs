//! The two-button permission screen, wired to the native backends.

use permikit_flow::{FlowContext, PermissionFlowController, RequestMode, features};

/// Application identifier of the demo.
pub const APP_ID: &str = "com.bignerdranch.android.permissions";

/// The screen: one flow per button.
#[derive(Debug, Clone)]
pub struct PermissionScreen {
    location: PermissionFlowController,
    camera: PermissionFlowController,
}

impl PermissionScreen {
    /// Build both flows on a shared context.
    #[must_use]
    pub fn new(context: &FlowContext, mode: RequestMode) -> Self {
        Self {
            location: features::location(context.clone(), mode),
            camera: features::camera(context.clone(), mode),
        }
    }

    /// "Request location" button.
    pub async fn on_request_location_clicked(&self) {
        report("location", &self.location).await;
    }

    /// "Request camera" button.
    pub async fn on_request_camera_and_record_clicked(&self) {
        report("camera", &self.camera).await;
    }
}

async fn report(name: &str, flow: &PermissionFlowController) {
    match flow.request_permissions().resolve().await {
        Ok(state) => println!("{name}: {state}"),
        Err(e) => println!("{name}: {e}"),
    }
}

/// Context backed by the desktop permission subsystem and presenter.
#[cfg(not(any(target_os = "android", target_os = "ios")))]
#[must_use]
pub fn native_context() -> FlowContext {
    use std::sync::Arc;

    use permikit_dialog::NativePresenter;
    use permikit_permission::sys;

    FlowContext::new(
        APP_ID,
        Arc::new(sys::native_platform()),
        Arc::new(NativePresenter::new("Permissions")),
        Arc::new(sys::native_settings()),
    )
}

/// Press both buttons once.
#[cfg(not(any(target_os = "android", target_os = "ios")))]
pub async fn run() {
    println!("Running Permission Demo...");

    let screen = PermissionScreen::new(&native_context(), RequestMode::Launcher);
    screen.on_request_location_clicked().await;
    screen.on_request_camera_and_record_clicked().await;
}
